use thiserror::Error;

/// A path parameter referenced a placeholder the endpoint template does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template does not contain placeholder {placeholder}")]
    MissingPlaceholder { placeholder: String },
}

/// A required argument was missing or unusable. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("`{name}` must not be empty")]
    Missing { name: &'static str },
    #[error("missing environment variable {var}")]
    EnvVar { var: String },
    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },
}

/// The request was dispatched but did not succeed.
///
/// `status_code` is `0` when no response was received from the server
/// (connection refused, DNS failure, TLS errors and the like).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status_code}: {body}")]
pub struct ApiError {
    pub status_code: u16,
    pub body: String,
}

impl ApiError {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status_code == 0
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

/// Error returned by every [`ApiService`](crate::ApiService) call.
///
/// `E` is the serializer's own error type; codec failures are passed through as-is.
#[derive(Debug, Error)]
pub enum RequestError<E> {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("request was cancelled")]
    Cancelled,
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Codec(E),
}

impl<E> RequestError<E> {
    /// Returns the [`ApiError`] if the server (or transport) reported a failure.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            RequestError::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, RequestError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_matches_status_and_body() {
        let err = ApiError::new(404, "not here");
        assert_eq!(err.to_string(), "HTTP 404: not here");
    }

    #[test]
    fn api_error_classifies_status_ranges() {
        assert!(ApiError::new(0, "refused").is_transport_failure());
        assert!(ApiError::new(422, "").is_client_error());
        assert!(!ApiError::new(422, "").is_server_error());
        assert!(ApiError::new(503, "").is_server_error());
        assert!(!ApiError::new(503, "").is_transport_failure());
    }

    #[test]
    fn codec_errors_are_transparent() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let expected = source.to_string();
        let err: RequestError<serde_json::Error> = RequestError::Codec(source);
        assert_eq!(err.to_string(), expected);
        assert!(err.api_error().is_none());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn api_error_converts_into_request_error() {
        let err: RequestError<serde_json::Error> = ApiError::new(500, "boom").into();
        assert_eq!(err.api_error().map(|e| e.status_code), Some(500));
    }
}
