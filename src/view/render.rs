use super::CatalogView;
use crate::models::Book;

/// Plain-text rendering of the current list, one block per book.
pub fn render_book_list(view: &CatalogView) -> String {
    if view.books.is_empty() {
        return String::from("(no books)\n");
    }

    view.books.iter().fold(String::new(), |mut acc, book| {
        acc.push_str(&render_book(book));
        acc
    })
}

pub fn render_validation_error(view: &CatalogView) -> Option<String> {
    view.validation_error
        .as_ref()
        .map(|message| format!("!! {}", message))
}

fn render_book(book: &Book) -> String {
    format!(
        "#{} {}\n  author: {}\n  genre: {}\n  status: {}\n",
        book.id, book.title, book.author, book.genre, book.availability_status
    )
}

#[cfg(test)]
mod tests {
    use super::{render_book_list, render_validation_error};
    use crate::models::{AvailabilityStatus, Book};
    use crate::view::CatalogView;

    #[test]
    fn render_one_entry_with_all_fields() {
        let mut view = CatalogView::new();
        view.books = vec![Book {
            id: 1,
            title: String::from("Dune"),
            author: String::from("Herbert"),
            genre: String::from("SciFi"),
            availability_status: AvailabilityStatus::Available,
        }];

        let rendered = render_book_list(&view);

        assert_eq!(
            "#1 Dune\n  author: Herbert\n  genre: SciFi\n  status: Available\n",
            rendered
        );
    }

    #[test]
    fn render_empty_list_placeholder() {
        let view = CatalogView::new();

        assert_eq!("(no books)\n", render_book_list(&view));
    }

    #[test]
    fn render_inline_error_only_when_set() {
        let mut view = CatalogView::new();

        assert_eq!(None, render_validation_error(&view));

        view.validation_error = Some(String::from("Book ID must be a number, got 'abc'"));

        assert_eq!(
            Some(String::from("!! Book ID must be a number, got 'abc'")),
            render_validation_error(&view)
        );
    }
}
