//! Synchronization adapter for resources with the extended, foreign-column
//! capability set.
//!
//! Screens whose side tables are addressed by `{field, id}` construct a
//! [`KeyedApiSync`] instead of an [`ApiSync`]; the extra four capabilities
//! exist only here, so calling an unsupported capability is a compile
//! error rather than a runtime one.

use std::ops::Deref;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Envelope;
use crate::traits::{BasicResource, FieldKey, KeyedResource, TokenStore};

use super::sync::{complete, ApiSync};

/// Adapter over a resource implementing both capability sets.
///
/// Derefs to [`ApiSync`], so all primary-key capabilities remain available.
pub struct KeyedApiSync<T> {
    basic: ApiSync<T>,
    keyed: Arc<dyn KeyedResource<T>>,
}

impl<T> Clone for KeyedApiSync<T> {
    fn clone(&self) -> Self {
        Self {
            basic: self.basic.clone(),
            keyed: Arc::clone(&self.keyed),
        }
    }
}

impl<T> Deref for KeyedApiSync<T> {
    type Target = ApiSync<T>;

    fn deref(&self) -> &ApiSync<T> {
        &self.basic
    }
}

impl<T> KeyedApiSync<T> {
    /// Build the adapter from one resource client implementing both
    /// capability sets.
    pub fn new<R>(resource: Arc<R>, tokens: Arc<dyn TokenStore>) -> Self
    where
        R: BasicResource<T> + KeyedResource<T> + 'static,
    {
        Self {
            basic: ApiSync::new(resource.clone(), tokens),
            keyed: resource,
        }
    }

    /// Fetch a single entity by foreign column.
    pub async fn get_item_by(
        &self,
        key: &FieldKey,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.basic.bearer_token() {
            Ok(token) => self.keyed.get_item_by(key, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Replace a single entity addressed by foreign column.
    pub async fn update_item_by(
        &self,
        key: &FieldKey,
        item: &T,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.basic.bearer_token() {
            Ok(token) => self.keyed.update_item_by(key, item, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Replace the whole set of entities sharing a foreign column value.
    pub async fn update_items_by(
        &self,
        key: &FieldKey,
        items: &[T],
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<Vec<T>>, ApiError> {
        set_loading(true);
        let result = match self.basic.bearer_token() {
            Ok(token) => self.keyed.update_items_by(key, items, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Delete the entities addressed by foreign column.
    pub async fn delete_item_by(
        &self,
        key: &FieldKey,
        mut set_loading: impl FnMut(bool),
    ) -> Result<Envelope<T>, ApiError> {
        set_loading(true);
        let result = match self.basic.bearer_token() {
            Ok(token) => self.keyed.delete_item_by(key, &token).await,
            Err(e) => Err(e),
        };
        set_loading(false);
        result
    }

    /// Sync variant of [`get_item_by`](Self::get_item_by).
    pub async fn get_item_by_sync(
        &self,
        key: &FieldKey,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.get_item_by(key, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`update_item_by`](Self::update_item_by).
    pub async fn update_item_by_sync(
        &self,
        key: &FieldKey,
        item: &T,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.update_item_by(key, item, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`update_items_by`](Self::update_items_by).
    pub async fn update_items_by_sync(
        &self,
        key: &FieldKey,
        items: &[T],
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<Vec<T>>),
    ) -> Result<(), ApiError> {
        let envelope = self.update_items_by(key, items, set_loading).await?;
        complete(envelope, on_success)
    }

    /// Sync variant of [`delete_item_by`](Self::delete_item_by).
    pub async fn delete_item_by_sync(
        &self,
        key: &FieldKey,
        set_loading: impl FnMut(bool),
        on_success: impl FnOnce(Envelope<T>),
    ) -> Result<(), ApiError> {
        let envelope = self.delete_item_by(key, set_loading).await?;
        complete(envelope, on_success)
    }
}
