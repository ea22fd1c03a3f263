//! Synchronization adapter over the mandatory capability set.

use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{build_request, Envelope, RequestOverrides};
use crate::traits::{BasicResource, TokenStore};

/// Adapter over a [`BasicResource`], shared by every screen.
///
/// Observable side effects per invocation: exactly one loading-callback
/// bracket (`true` immediately, `false` unconditionally afterwards, error
/// paths included) and exactly one resource call. No batching, no request
/// deduplication, no caching, no retries, no cancellation.
pub struct ApiSync<T> {
    resource: Arc<dyn BasicResource<T>>,
    tokens: Arc<dyn TokenStore>,
}

impl<T> Clone for ApiSync<T> {
    fn clone(&self) -> Self {
        Self {
            resource: Arc::clone(&self.resource),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<T> ApiSync<T> {
    pub fn new(resource: Arc<dyn BasicResource<T>>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { resource, tokens }
    }

    /// Read the bearer token from storage. The adapter never refreshes or
    /// validates it; an expired token fails downstream like any other.
    pub(crate) fn bearer_token(&self) -> Result<String, ApiError> {
        match self.tokens.load() {
            Ok(Some(token)) => Ok(token.access_token),
            Ok(None) => Err(ApiError::MissingToken),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a page of entities. The caller's partial body is completed
    /// from the process-wide defaults before dispatch.
    pub async fn get_items(
        &self,
        overrides: RequestOverrides,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<Vec<T>>, ApiError> {
        let body = build_request(overrides);
        set_loading(true);
        let result = match self.bearer_token() {
            Ok(token) => self.resource.get_items(&body, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Fetch a single entity by primary key.
    pub async fn get_item_by_pk(
        &self,
        id: &str,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.bearer_token() {
            Ok(token) => self.resource.get_item_by_pk(id, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Create a new entity.
    pub async fn create_item(
        &self,
        item: &T,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.bearer_token() {
            Ok(token) => self.resource.create_item(item, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Replace an entity addressed by primary key.
    pub async fn update_item_by_pk(
        &self,
        id: &str,
        item: &T,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.bearer_token() {
            Ok(token) => self.resource.update_item_by_pk(id, item, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Delete an entity addressed by primary key.
    pub async fn delete_item_by_pk(
        &self,
        id: &str,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.bearer_token() {
            Ok(token) => self.resource.delete_item_by_pk(id, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Sync variant of [`get_items`](Self::get_items).
    pub async fn get_items_sync(
        &self,
        overrides: RequestOverrides,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<Vec<T>>),
    ) -> Result<(), ApiError> {
        let envelope = self.get_items(overrides, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`get_item_by_pk`](Self::get_item_by_pk).
    pub async fn get_item_by_pk_sync(
        &self,
        id: &str,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.get_item_by_pk(id, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`create_item`](Self::create_item).
    pub async fn create_item_sync(
        &self,
        item: &T,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.create_item(item, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`update_item_by_pk`](Self::update_item_by_pk).
    pub async fn update_item_by_pk_sync(
        &self,
        id: &str,
        item: &T,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.update_item_by_pk(id, item, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`delete_item_by_pk`](Self::delete_item_by_pk).
    pub async fn delete_item_by_pk_sync(
        &self,
        id: &str,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.delete_item_by_pk(id, set_loading).await?;
        complete(envelope, on_success)
    }
}

/// Shared tail of every sync variant: reject `success: false` envelopes,
/// otherwise invoke the success callback exactly once.
pub(crate) fn complete<P>(
    envelope: Envelope<P>,
    on_success: impl FnOnce(Envelope<P>),
) -> Result<(), ApiError> {
    if !envelope.success {
        tracing::warn!(
            message = envelope.message.as_deref().unwrap_or_default(),
            "server reported failure"
        );
        return Err(ApiError::logical(envelope.message));
    }
    on_success(envelope);
    Ok(())
}
