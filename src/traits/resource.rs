//! Resource client trait abstractions.
//!
//! Every backend entity (colors, groups, products, sewing lines, ...) is
//! reached through the same capability set. The mandatory capabilities live
//! on [`BasicResource`]; side tables addressed by a foreign column instead
//! of the primary key implement [`KeyedResource`] on top. Splitting the two
//! lets the type system decide whether the extended methods exist, instead
//! of a runtime check.
//!
//! Implementations return the raw [`Envelope`] without interpreting its
//! `success` flag; that check belongs to the `*_sync` adapter variants.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Envelope, RequestBody};

/// Address of a row in a side table: a foreign column name plus its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    pub field: String,
    pub id: String,
}

impl FieldKey {
    pub fn new(field: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            id: id.into(),
        }
    }
}

/// Mandatory capability set, addressed by primary key.
#[async_trait]
pub trait BasicResource<T>: Send + Sync {
    /// Create a new entity.
    async fn create_item(&self, item: &T, token: &str) -> Result<Envelope<T>, ApiError>;

    /// Fetch a single entity by primary key.
    async fn get_item_by_pk(&self, id: &str, token: &str) -> Result<Envelope<T>, ApiError>;

    /// Fetch a page of entities shaped by the request body.
    async fn get_items(
        &self,
        body: &RequestBody,
        token: &str,
    ) -> Result<Envelope<Vec<T>>, ApiError>;

    /// Replace an entity addressed by primary key.
    async fn update_item_by_pk(
        &self,
        id: &str,
        item: &T,
        token: &str,
    ) -> Result<Envelope<T>, ApiError>;

    /// Delete an entity addressed by primary key. Whether this is a soft or
    /// hard delete is the server's business.
    async fn delete_item_by_pk(&self, id: &str, token: &str) -> Result<Envelope<T>, ApiError>;
}

/// Optional capability set for one-to-one / one-to-many side tables keyed
/// by a foreign column.
#[async_trait]
pub trait KeyedResource<T>: Send + Sync {
    /// Fetch a single entity by foreign column.
    async fn get_item_by(&self, key: &FieldKey, token: &str) -> Result<Envelope<T>, ApiError>;

    /// Replace a single entity addressed by foreign column.
    async fn update_item_by(
        &self,
        key: &FieldKey,
        item: &T,
        token: &str,
    ) -> Result<Envelope<T>, ApiError>;

    /// Replace the whole set of entities sharing a foreign column value.
    async fn update_items_by(
        &self,
        key: &FieldKey,
        items: &[T],
        token: &str,
    ) -> Result<Envelope<Vec<T>>, ApiError>;

    /// Delete the entities addressed by foreign column.
    async fn delete_item_by(&self, key: &FieldKey, token: &str) -> Result<Envelope<T>, ApiError>;
}
