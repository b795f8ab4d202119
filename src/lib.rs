pub mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod options;
pub mod serializer;
pub mod transport;

pub use api::{ApiResult, ApiService};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use endpoint::EndpointBuilder;
pub use error::{ApiError, ArgumentError, RequestError, TemplateError};
pub use options::RequestOptions;
pub use serializer::{JsonSerializer, Serializer};
pub use transport::{Transport, TransportError, TransportRequest, TransportResponse};

pub use bytes::Bytes;
pub use tokio_util::sync::CancellationToken;
