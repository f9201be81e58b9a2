//! The greeting endpoint.

/// Body returned by `GET /hello`.
pub const GREETING: &str = "hello world";

/// Greeting handler.
///
/// Takes no extractors, so headers, query string and body never affect the
/// response. Axum serves the `&'static str` as `text/plain; charset=utf-8`.
pub async fn hello() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_returns_greeting() {
        assert_eq!(hello().await, "hello world");
    }

    #[tokio::test]
    async fn test_hello_is_repeatable() {
        for _ in 0..100 {
            assert_eq!(hello().await, GREETING);
        }
    }
}
