//! Generic REST resource client.
//!
//! One `RestResource<T>` instance serves one backend entity (colors,
//! groups, products, ...). It implements both resource traits over an
//! injected [`HttpClient`], so every screen talks to its entity through
//! identical code. Routes:
//!
//! - `POST   {base}/{resource}/list` — paged list, JSON [`RequestBody`]
//! - `POST   {base}/{resource}` — create
//! - `GET    {base}/{resource}/{id}` — fetch by primary key
//! - `PUT    {base}/{resource}/{id}` — update by primary key
//! - `DELETE {base}/{resource}/{id}` — delete by primary key
//! - `GET/PUT/DELETE {base}/{resource}/by/{field}/{id}` — foreign-column
//!   variants; the one-to-many batch update goes to `.../batch`
//!
//! A non-2xx status or a body that does not decode as an [`Envelope`] is a
//! transport failure. The envelope's own `success` flag is not interpreted
//! here.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Envelope, RequestBody};
use crate::traits::{
    BasicResource, FieldKey, Headers, HttpClient, HttpError, KeyedResource, Response,
};

use super::reqwest_http::ReqwestHttpClient;

/// Generic resource client for one entity type `T`.
pub struct RestResource<T> {
    http: Arc<dyn HttpClient>,
    base_url: String,
    resource: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> RestResource<T> {
    /// Create a resource client over an injected HTTP client.
    pub fn new(http: Arc<dyn HttpClient>, config: &ApiConfig, resource: impl Into<String>) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            resource: resource.into(),
            _entity: PhantomData,
        }
    }

    /// Create a resource client with a production reqwest client built
    /// from the config's timeout.
    pub fn from_config(config: &ApiConfig, resource: impl Into<String>) -> Self {
        let http = Arc::new(ReqwestHttpClient::with_timeout(config.timeout()));
        Self::new(http, config, resource)
    }

    fn url(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            format!("{}/{}", self.base_url, self.resource)
        } else {
            format!("{}/{}/{}", self.base_url, self.resource, suffix)
        }
    }

    fn headers(token: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("authorization".to_string(), format!("Bearer {}", token));
        headers
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn decode<P: DeserializeOwned>(response: Response) -> Result<Envelope<P>, ApiError> {
        if !response.is_success() {
            let message = response.text().unwrap_or_default();
            tracing::warn!(status = response.status, "resource call failed");
            return Err(ApiError::Transport(HttpError::ServerError {
                status: response.status,
                message,
            }));
        }
        response
            .json::<Envelope<P>>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl<T> BasicResource<T> for RestResource<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn create_item(&self, item: &T, token: &str) -> Result<Envelope<T>, ApiError> {
        let url = self.url("");
        tracing::debug!(%url, "create_item");
        let body = Self::encode(item)?;
        let response = self.http.post(&url, &body, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn get_item_by_pk(&self, id: &str, token: &str) -> Result<Envelope<T>, ApiError> {
        let url = self.url(id);
        tracing::debug!(%url, "get_item_by_pk");
        let response = self.http.get(&url, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn get_items(
        &self,
        body: &RequestBody,
        token: &str,
    ) -> Result<Envelope<Vec<T>>, ApiError> {
        let url = self.url("list");
        tracing::debug!(%url, page = body.paginator.page, "get_items");
        let body = Self::encode(body)?;
        let response = self.http.post(&url, &body, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn update_item_by_pk(
        &self,
        id: &str,
        item: &T,
        token: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.url(id);
        tracing::debug!(%url, "update_item_by_pk");
        let body = Self::encode(item)?;
        let response = self.http.put(&url, &body, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn delete_item_by_pk(&self, id: &str, token: &str) -> Result<Envelope<T>, ApiError> {
        let url = self.url(id);
        tracing::debug!(%url, "delete_item_by_pk");
        let response = self.http.delete(&url, &Self::headers(token)).await?;
        Self::decode(response)
    }
}

#[async_trait]
impl<T> KeyedResource<T> for RestResource<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn get_item_by(&self, key: &FieldKey, token: &str) -> Result<Envelope<T>, ApiError> {
        let url = self.url(&format!("by/{}/{}", key.field, key.id));
        tracing::debug!(%url, "get_item_by");
        let response = self.http.get(&url, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn update_item_by(
        &self,
        key: &FieldKey,
        item: &T,
        token: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.url(&format!("by/{}/{}", key.field, key.id));
        tracing::debug!(%url, "update_item_by");
        let body = Self::encode(item)?;
        let response = self.http.put(&url, &body, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn update_items_by(
        &self,
        key: &FieldKey,
        items: &[T],
        token: &str,
    ) -> Result<Envelope<Vec<T>>, ApiError> {
        let url = self.url(&format!("by/{}/{}/batch", key.field, key.id));
        tracing::debug!(%url, count = items.len(), "update_items_by");
        let body = Self::encode(&items)?;
        let response = self.http.put(&url, &body, &Self::headers(token)).await?;
        Self::decode(response)
    }

    async fn delete_item_by(&self, key: &FieldKey, token: &str) -> Result<Envelope<T>, ApiError> {
        let url = self.url(&format!("by/{}/{}", key.field, key.id));
        tracing::debug!(%url, "delete_item_by");
        let response = self.http.delete(&url, &Self::headers(token)).await?;
        Self::decode(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
    struct Color {
        id: i64,
        name: String,
    }

    fn resource() -> RestResource<Color> {
        let config = ApiConfig::new().with_base_url("http://localhost:8000/api/");
        RestResource::from_config(&config, "colors")
    }

    #[test]
    fn url_building() {
        let res = resource();
        assert_eq!(res.url(""), "http://localhost:8000/api/colors");
        assert_eq!(res.url("list"), "http://localhost:8000/api/colors/list");
        assert_eq!(res.url("7"), "http://localhost:8000/api/colors/7");
        assert_eq!(
            res.url("by/group_id/3"),
            "http://localhost:8000/api/colors/by/group_id/3"
        );
    }

    #[test]
    fn headers_carry_bearer_token() {
        let headers = RestResource::<Color>::headers("tok-123");
        assert_eq!(
            headers.get("authorization"),
            Some(&"Bearer tok-123".to_string())
        );
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn decode_rejects_non_2xx() {
        let response = Response::new(500, Bytes::from("boom"));
        let err = RestResource::<Color>::decode::<Color>(response).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transport(HttpError::ServerError { status: 500, .. })
        ));
    }

    #[test]
    fn decode_rejects_bad_json() {
        let response = Response::new(200, Bytes::from("not json"));
        let err = RestResource::<Color>::decode::<Color>(response).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn decode_passes_failure_envelope_through() {
        // A well-formed envelope with success:false is NOT an error here;
        // the sync adapter variants own that check.
        let response = Response::new(
            200,
            Bytes::from(r#"{"success":false,"message":"conflict"}"#),
        );
        let envelope = RestResource::<Color>::decode::<Color>(response).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("conflict"));
    }
}
