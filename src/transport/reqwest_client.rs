use super::{Transport, TransportError, TransportRequest, TransportResponse};

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            status: error.status().map(|s| s.as_u16()),
            description: error.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for reqwest::Client {
    /// Converts the request into a `reqwest::Request`, sends it and buffers the body.
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| TransportError {
            status: Some(status),
            description: e.to_string(),
        })?;

        Ok(TransportResponse { status, body })
    }
}
