//! Request execution pipeline.
//!
//! Every verb goes through the same steps: build a [`TransportRequest`]
//! (serializing the body if there is one), apply the caller's headers, send it
//! while watching the caller's cancellation token, turn 4xx/5xx statuses and
//! transport failures into [`ApiError`], then decode the body.

use bytes::Bytes;
use log::{debug, trace};
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ArgumentError, RequestError};
use crate::options::RequestOptions;
use crate::serializer::Serializer;
use crate::transport::{Transport, TransportRequest, TransportResponse};

pub type ApiResult<T, S> = Result<T, RequestError<<S as Serializer>::Error>>;

/// Typed REST client.
///
/// `S` encodes request bodies and decodes responses; `C` performs the HTTP
/// exchange and defaults to `reqwest::Client`. Calls share no state, so one
/// service can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ApiService<S, C = reqwest::Client> {
    serializer: S,
    transport: C,
}

impl<S: Serializer> ApiService<S> {
    pub fn new(serializer: S) -> Self {
        Self::with_transport(serializer, reqwest::Client::new())
    }
}

impl<S, C> ApiService<S, C>
where
    S: Serializer,
    C: Transport,
{
    pub fn with_transport(serializer: S, transport: C) -> Self {
        Self {
            serializer,
            transport,
        }
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn transport(&self) -> &C {
        &self.transport
    }

    /// Sends a GET and decodes the response.
    ///
    /// An empty or whitespace-only body yields `R::default()`.
    pub async fn get<R>(&self, url: &str, options: &RequestOptions) -> ApiResult<R, S>
    where
        R: DeserializeOwned + Default,
    {
        let request = TransportRequest::new(Method::GET, url);
        self.send_for_value(request, options).await
    }

    pub async fn post<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> ApiResult<R, S>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let request = self.body_request(Method::POST, url, body)?;
        self.send_for_value(request, options).await
    }

    pub async fn put<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> ApiResult<R, S>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let request = self.body_request(Method::PUT, url, body)?;
        self.send_for_value(request, options).await
    }

    pub async fn patch<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> ApiResult<R, S>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let request = self.body_request(Method::PATCH, url, body)?;
        self.send_for_value(request, options).await
    }

    pub async fn delete<R>(&self, url: &str, options: &RequestOptions) -> ApiResult<R, S>
    where
        R: DeserializeOwned + Default,
    {
        let request = TransportRequest::new(Method::DELETE, url);
        self.send_for_value(request, options).await
    }

    /// Sends a POST and ignores the response body.
    pub async fn post_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> ApiResult<(), S>
    where
        T: Serialize + ?Sized,
    {
        let request = self.body_request(Method::POST, url, body)?;
        self.send(request, options).await.map(|_| ())
    }

    pub async fn put_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> ApiResult<(), S>
    where
        T: Serialize + ?Sized,
    {
        let request = self.body_request(Method::PUT, url, body)?;
        self.send(request, options).await.map(|_| ())
    }

    pub async fn patch_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> ApiResult<(), S>
    where
        T: Serialize + ?Sized,
    {
        let request = self.body_request(Method::PATCH, url, body)?;
        self.send(request, options).await.map(|_| ())
    }

    pub async fn delete_no_content(&self, url: &str, options: &RequestOptions) -> ApiResult<(), S> {
        let request = TransportRequest::new(Method::DELETE, url);
        self.send(request, options).await.map(|_| ())
    }

    /// Sends a GET and returns the raw response body.
    pub async fn get_bytes(&self, url: &str, options: &RequestOptions) -> ApiResult<Bytes, S> {
        let request = TransportRequest::new(Method::GET, url);
        let response = self.send(request, options).await?;
        Ok(response.body)
    }

    fn body_request<T>(&self, method: Method, url: &str, body: &T) -> ApiResult<TransportRequest, S>
    where
        T: Serialize + ?Sized,
    {
        let text = self.serializer.serialize(body).map_err(RequestError::Codec)?;

        let mut request = TransportRequest::new(method, url);
        request.body = Some(Bytes::from(text));
        Ok(request)
    }

    async fn send_for_value<R>(
        &self,
        request: TransportRequest,
        options: &RequestOptions,
    ) -> ApiResult<R, S>
    where
        R: DeserializeOwned + Default,
    {
        let response = self.send(request, options).await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Ok(R::default());
        }

        self.serializer.deserialize(&text).map_err(RequestError::Codec)
    }

    async fn send(
        &self,
        mut request: TransportRequest,
        options: &RequestOptions,
    ) -> ApiResult<TransportResponse, S> {
        apply_headers(&mut request.headers, options)?;

        let cancellation = options.cancellation();
        if cancellation.is_cancelled() {
            debug!("{} {} cancelled before dispatch", request.method, request.url);
            return Err(RequestError::Cancelled);
        }

        let _in_flight = InFlight::new(&request);
        debug!("{} {}", request.method, request.url);

        // Losing the race drops the transport future, which aborts the exchange.
        let outcome = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                debug!("request cancelled while in flight");
                return Err(RequestError::Cancelled);
            }
            outcome = self.transport.execute(request) => outcome,
        };

        let response = outcome.map_err(|e| ApiError::new(e.status.unwrap_or(0), e.description))?;
        debug!("response status {}", response.status);

        if !response.is_success() {
            let text = response.text();
            let body = if text.is_empty() {
                status_description(response.status)
            } else {
                text
            };
            return Err(ApiError::new(response.status, body).into());
        }

        Ok(response)
    }
}

/// Logs the end of a dispatch on every exit path. The request, buffers and
/// connection are owned by the transport future and released when it drops.
struct InFlight {
    method: Method,
    url: String,
}

impl InFlight {
    fn new(request: &TransportRequest) -> Self {
        Self {
            method: request.method.clone(),
            url: request.url.clone(),
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        trace!("{} {} finished", self.method, self.url);
    }
}

fn apply_headers(headers: &mut HeaderMap, options: &RequestOptions) -> Result<(), ArgumentError> {
    for (key, value) in options.headers() {
        if key.is_empty() {
            continue;
        }

        let invalid = || ArgumentError::InvalidHeader { name: key.clone() };
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
        let value =
            HeaderValue::from_str(value.as_deref().unwrap_or_default()).map_err(|_| invalid())?;
        headers.insert(name, value);
    }
    Ok(())
}

fn status_description(status: u16) -> String {
    match StatusCode::from_u16(status).ok().and_then(|s| s.canonical_reason()) {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}
