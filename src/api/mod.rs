use anyhow;
use async_trait::async_trait;

mod client;
pub mod url;

pub use client::LibraryClient;

use crate::models::{Book, NewBook};

/// The remote library collection, as exposed over HTTP.
///
/// The error taxonomy is flat: a not-found response and a transport
/// failure are both a plain `Err`, and callers cannot tell them apart.
/// The add flow's uniqueness check relies on exactly that.
#[async_trait]
pub trait BookApi {
    async fn all_books(&self) -> anyhow::Result<Vec<Book>>;

    async fn book_by_id(&self, id: i64) -> anyhow::Result<Book>;

    async fn search_by_title(&self, title: &str) -> anyhow::Result<Vec<Book>>;

    async fn search_by_id(&self, id: &str) -> anyhow::Result<Vec<Book>>;

    async fn add_book(&self, book: &NewBook) -> anyhow::Result<Book>;

    /// Part of the API surface, but nothing in the catalog view calls it.
    async fn update_book(&self, id: i64, book: &NewBook) -> anyhow::Result<Book>;

    async fn delete_book(&self, id: i64) -> anyhow::Result<()>;
}
