use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

/// Per-call configuration: extra headers and a cancellation token.
///
/// The default value carries no headers and a token that is never cancelled.
/// Content type is never set implicitly; add a `Content-Type` header that
/// matches the serializer when the server expects one.
///
/// Header names are case-insensitive and stored lowercased, so `Authorization`
/// and `authorization` name the same entry and the last one set wins.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HashMap<String, Option<String>>,
    cancellation: CancellationToken,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous value for the same key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(normalize(key.into()), Some(value.into()));
        self
    }

    /// Sets a header that is sent with an empty value.
    pub fn header_without_value(mut self, key: impl Into<String>) -> Self {
        self.headers.insert(normalize(key.into()), None);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn headers(&self) -> &HashMap<String, Option<String>> {
        &self.headers
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

fn normalize(key: String) -> String {
    key.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_headers_and_never_cancels() {
        let options = RequestOptions::default();
        assert!(options.headers().is_empty());
        assert!(!options.cancellation().is_cancelled());
    }

    #[test]
    fn duplicate_header_keys_overwrite() {
        let options = RequestOptions::new()
            .header("Authorization", "Bearer a")
            .header("Authorization", "Bearer b");
        assert_eq!(options.headers().len(), 1);
        assert_eq!(
            options.headers().get("authorization"),
            Some(&Some("Bearer b".to_string()))
        );
    }

    #[test]
    fn header_without_value_is_recorded() {
        let options = RequestOptions::new().header_without_value("X-Flag");
        assert_eq!(options.headers().get("x-flag"), Some(&None));
    }

    #[test]
    fn header_keys_differing_in_case_overwrite_in_order() {
        let options = RequestOptions::new()
            .header("Authorization", "Bearer a")
            .header("authorization", "Bearer b")
            .header("AUTHORIZATION", "Bearer c");
        assert_eq!(options.headers().len(), 1);
        assert_eq!(
            options.headers().get("authorization"),
            Some(&Some("Bearer c".to_string()))
        );

        let options = RequestOptions::new()
            .header("X-Flag", "on")
            .header_without_value("x-flag");
        assert_eq!(options.headers().get("x-flag"), Some(&None));
    }

    #[test]
    fn cancellation_token_is_shared_with_caller() {
        let token = CancellationToken::new();
        let options = RequestOptions::new().with_cancellation(token.clone());
        token.cancel();
        assert!(options.cancellation().is_cancelled());
    }
}
