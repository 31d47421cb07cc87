mod book;

pub use book::{AvailabilityStatus, Book, BookDraft, NewBook};
