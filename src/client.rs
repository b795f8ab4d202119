use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::ApiService;
use crate::error::RequestError;
use crate::options::RequestOptions;
use crate::serializer::Serializer;
use crate::transport::Transport;

/// The verbs of [`ApiService`] as a trait, for code that should not depend on
/// a concrete serializer or transport.
///
/// Generic verbs keep this out of `mockall::automock`; tests substitute the
/// transport under a real [`ApiService`] instead.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get<R>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<R, RequestError<Self::Error>>
    where
        R: DeserializeOwned + Default + Send;

    async fn post<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<R, RequestError<Self::Error>>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send;

    async fn put<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<R, RequestError<Self::Error>>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send;

    async fn patch<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<R, RequestError<Self::Error>>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send;

    async fn delete<R>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<R, RequestError<Self::Error>>
    where
        R: DeserializeOwned + Default + Send;

    async fn post_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<(), RequestError<Self::Error>>
    where
        T: Serialize + Sync + ?Sized;

    async fn put_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<(), RequestError<Self::Error>>
    where
        T: Serialize + Sync + ?Sized;

    async fn patch_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<(), RequestError<Self::Error>>
    where
        T: Serialize + Sync + ?Sized;

    async fn delete_no_content(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<(), RequestError<Self::Error>>;

    async fn get_bytes(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Bytes, RequestError<Self::Error>>;
}

#[async_trait::async_trait]
impl<S, C> ApiClient for ApiService<S, C>
where
    S: Serializer,
    C: Transport,
{
    type Error = S::Error;

    async fn get<R>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<R, RequestError<S::Error>>
    where
        R: DeserializeOwned + Default + Send,
    {
        ApiService::get(self, url, options).await
    }

    async fn post<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<R, RequestError<S::Error>>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send,
    {
        ApiService::post(self, url, body, options).await
    }

    async fn put<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<R, RequestError<S::Error>>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send,
    {
        ApiService::put(self, url, body, options).await
    }

    async fn patch<T, R>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<R, RequestError<S::Error>>
    where
        T: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send,
    {
        ApiService::patch(self, url, body, options).await
    }

    async fn delete<R>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<R, RequestError<S::Error>>
    where
        R: DeserializeOwned + Default + Send,
    {
        ApiService::delete(self, url, options).await
    }

    async fn post_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<(), RequestError<S::Error>>
    where
        T: Serialize + Sync + ?Sized,
    {
        ApiService::post_no_content(self, url, body, options).await
    }

    async fn put_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<(), RequestError<S::Error>>
    where
        T: Serialize + Sync + ?Sized,
    {
        ApiService::put_no_content(self, url, body, options).await
    }

    async fn patch_no_content<T>(
        &self,
        url: &str,
        body: &T,
        options: &RequestOptions,
    ) -> Result<(), RequestError<S::Error>>
    where
        T: Serialize + Sync + ?Sized,
    {
        ApiService::patch_no_content(self, url, body, options).await
    }

    async fn delete_no_content(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<(), RequestError<S::Error>> {
        ApiService::delete_no_content(self, url, options).await
    }

    async fn get_bytes(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<Bytes, RequestError<S::Error>> {
        ApiService::get_bytes(self, url, options).await
    }
}
