//! HTTP transport abstraction.
//!
//! [`ApiService`](crate::ApiService) builds a [`TransportRequest`] and hands it
//! to a [`Transport`], which performs the exchange and returns the status code
//! and complete body. Error statuses are returned as ordinary responses; only
//! failures where no complete response was received become a [`TransportError`].

mod reqwest_client;

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// One outgoing HTTP call described as plain data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// A completed exchange: status code plus the full response body.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any status below 400; only 4xx and 5xx count as HTTP errors.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The exchange failed without producing a complete response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct TransportError {
    /// Set when the failure happened after the status line arrived.
    pub status: Option<u16>,
    pub description: String,
}

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            status: None,
            description: description.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and reads the full response body.
    ///
    /// Dropping the returned future must abort the exchange.
    async fn execute(&self, request: TransportRequest)
    -> Result<TransportResponse, TransportError>;
}
