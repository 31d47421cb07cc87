use anyhow;
use async_trait::async_trait;
use log::trace;
use reqwest;

use super::url;
use super::BookApi;
use crate::models::{Book, NewBook};

/// reqwest-backed client for the library API. No timeout, no retry; every
/// non-2xx status becomes an error through `error_for_status`.
pub struct LibraryClient {
    base_url: String,
    client: reqwest::Client,
}

impl LibraryClient {
    pub fn new(base_url: String) -> anyhow::Result<LibraryClient> {
        let client = reqwest::Client::builder().build()?;

        Ok(LibraryClient { base_url, client })
    }
}

#[async_trait]
impl BookApi for LibraryClient {
    async fn all_books(&self) -> anyhow::Result<Vec<Book>> {
        trace!("LibraryClient::all_books()");

        let books = self
            .client
            .get(url::books(&self.base_url).as_str())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Book>>()
            .await?;

        Ok(books)
    }

    async fn book_by_id(&self, id: i64) -> anyhow::Result<Book> {
        trace!("LibraryClient::book_by_id({})", id);

        let book = self
            .client
            .get(url::book(&self.base_url, id).as_str())
            .send()
            .await?
            .error_for_status()?
            .json::<Book>()
            .await?;

        Ok(book)
    }

    async fn search_by_title(&self, title: &str) -> anyhow::Result<Vec<Book>> {
        trace!("LibraryClient::search_by_title({})", title);

        let books = self
            .client
            .get(url::search(&self.base_url).as_str())
            .query(&[("title", title)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Book>>()
            .await?;

        Ok(books)
    }

    async fn search_by_id(&self, id: &str) -> anyhow::Result<Vec<Book>> {
        trace!("LibraryClient::search_by_id({})", id);

        let books = self
            .client
            .get(url::search(&self.base_url).as_str())
            .query(&[("id", id)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Book>>()
            .await?;

        Ok(books)
    }

    async fn add_book(&self, book: &NewBook) -> anyhow::Result<Book> {
        trace!("LibraryClient::add_book()");

        let created = self
            .client
            .post(url::books(&self.base_url).as_str())
            .json(book)
            .send()
            .await?
            .error_for_status()?
            .json::<Book>()
            .await?;

        Ok(created)
    }

    async fn update_book(&self, id: i64, book: &NewBook) -> anyhow::Result<Book> {
        trace!("LibraryClient::update_book({})", id);

        let updated = self
            .client
            .put(url::book(&self.base_url, id).as_str())
            .json(book)
            .send()
            .await?
            .error_for_status()?
            .json::<Book>()
            .await?;

        Ok(updated)
    }

    async fn delete_book(&self, id: i64) -> anyhow::Result<()> {
        trace!("LibraryClient::delete_book({})", id);

        self.client
            .delete(url::book(&self.base_url, id).as_str())
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
