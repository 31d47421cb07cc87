use std::env;

/// Spring Boot's default port, same as the development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Base URL of the library API. `LIBRARY_API_URL` overrides the default,
/// environment by environment; there is no other configuration surface.
pub fn api_url() -> String {
    normalize(env::var("LIBRARY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
}

fn normalize(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(
            "https://library.example.com",
            normalize(String::from("https://library.example.com/"))
        );
        assert_eq!(
            "http://localhost:8080",
            normalize(String::from("http://localhost:8080"))
        );
    }
}
