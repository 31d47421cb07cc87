use log::{debug, error, info, trace};

mod render;

pub use render::{render_book_list, render_validation_error};

use crate::api::BookApi;
use crate::models::{Book, BookDraft};

/// # Catalog View
/// The one piece of state in the client: the local copy of the book list,
/// the new-book draft, the two search query fields, and the inline
/// validation-error slot.
///
/// The list is a cache of server state. It is replaced wholesale on
/// load/search and patched optimistically on add/delete; nothing ever
/// re-syncs it against the server afterwards.
pub struct CatalogView {
    pub books: Vec<Book>,
    pub draft: BookDraft,
    pub title_query: String,
    pub id_query: String,
    pub validation_error: Option<String>,
}

impl CatalogView {
    pub fn new() -> CatalogView {
        CatalogView {
            books: Vec::new(),
            draft: BookDraft::default(),
            title_query: String::new(),
            id_query: String::new(),
            validation_error: None,
        }
    }

    /// Wholesale refresh from the server. A failed fetch is logged and
    /// keeps whatever list is already on screen.
    pub async fn load_all(&mut self, api: &impl BookApi) {
        trace!("CatalogView::load_all()");

        match api.all_books().await {
            Ok(books) => {
                info!("loaded {} books", books.len());
                self.books = books;
            }
            Err(err) => error!("error fetching books: {:?}", err),
        }
    }

    /// Submit the draft: an optional uniqueness lookup, then the create.
    ///
    /// A non-numeric id never reaches the network. A numeric id is looked
    /// up first; finding a record blocks the add with an inline error.
    pub async fn add_book(&mut self, api: &impl BookApi) {
        trace!("CatalogView::add_book()");

        let id = match self.validate_draft_id() {
            Ok(id) => id,
            Err(message) => {
                self.validation_error = Some(message);
                return;
            }
        };

        self.validation_error = None;

        if let Some(id) = id {
            // Any lookup failure, a not-found response included, reads as
            // "id free" and lets the add proceed. Two concurrent adds with
            // the same id can both pass this check; the server's own
            // uniqueness enforcement is the only remaining guard.
            match api.book_by_id(id).await {
                Ok(existing) => {
                    debug!("id {} already taken by '{}'", id, existing.title);
                    self.validation_error = Some(format!("Book ID {} already exists", id));
                    return;
                }
                Err(err) => debug!("id lookup for {} failed: {:?}", id, err),
            }
        }

        match api.add_book(&self.draft.to_new_book(id)).await {
            Ok(book) => {
                info!("added book {}: {}", book.id, book.title);
                self.books.push(book);
                self.draft = BookDraft::default();
                self.title_query.clear();
                self.id_query.clear();
            }
            Err(err) => error!("error adding book: {:?}", err),
        }
    }

    /// Exactly one query is honoured per call: an id query wins over a
    /// title query, and two empty queries issue no request at all.
    pub async fn search(&mut self, api: &impl BookApi) {
        trace!("CatalogView::search()");

        let id_query = self.id_query.trim();
        let title_query = self.title_query.trim();

        let result = if !id_query.is_empty() {
            api.search_by_id(id_query).await
        } else if !title_query.is_empty() {
            api.search_by_title(title_query).await
        } else {
            return;
        };

        match result {
            Ok(books) => {
                info!("search returned {} books", books.len());
                self.books = books;
            }
            Err(err) => error!("error searching books: {:?}", err),
        }
    }

    /// Remove a book from the server, then from the local list. A failed
    /// delete is logged only; the record stays visible.
    pub async fn delete_book(&mut self, api: &impl BookApi, id: i64) {
        trace!("CatalogView::delete_book({})", id);

        match api.delete_book(id).await {
            Ok(()) => {
                info!("deleted book {}", id);
                self.books.retain(|book| book.id != id);
            }
            Err(err) => error!("error deleting book {}: {:?}", id, err),
        }
    }

    fn validate_draft_id(&self) -> Result<Option<i64>, String> {
        let raw = self.draft.id.trim();

        if raw.is_empty() {
            return Ok(None);
        }

        match raw.parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => Err(format!("Book ID must be a number, got '{}'", raw)),
        }
    }
}
