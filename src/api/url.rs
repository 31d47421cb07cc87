//! Endpoint URL builders for the library API. Query strings are attached
//! by the client, not here.

pub fn books(base: &str) -> String {
    format!("{}/books", base)
}

pub fn book(base: &str, id: i64) -> String {
    format!("{}/books/{}", base, id)
}

pub fn search(base: &str) -> String {
    format!("{}/books/search", base)
}

#[cfg(test)]
mod tests {
    use super::{book, books, search};

    #[test]
    fn build_endpoint_urls() {
        assert_eq!("http://localhost:8080/books", books("http://localhost:8080"));
        assert_eq!(
            "http://localhost:8080/books/3",
            book("http://localhost:8080", 3)
        );
        assert_eq!(
            "http://localhost:8080/books/search",
            search("http://localhost:8080")
        );
    }
}
