use std::env;

use crate::endpoint::EndpointBuilder;
use crate::error::ArgumentError;

pub const BASE_URL_ENV_VAR: &str = "REST_BUILDER_BASE_URL";

/// Base URL that endpoint templates are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ArgumentError> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(ArgumentError::Missing { name: "base_url" });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads the base URL from the `REST_BUILDER_BASE_URL` environment variable.
    pub fn from_env() -> Result<Self, ArgumentError> {
        let base_url = env::var(BASE_URL_ENV_VAR).map_err(|_| ArgumentError::EnvVar {
            var: BASE_URL_ENV_VAR.to_string(),
        })?;
        Self::new(&base_url)
    }

    /// Base URL followed by the built endpoint, concatenated as-is.
    pub fn url(&self, endpoint: &EndpointBuilder) -> String {
        format!("{}{}", self.base_url, endpoint.build())
    }
}
