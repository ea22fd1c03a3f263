//! View-model composing a table state with its synchronization adapter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::ApiSync;
use crate::error::ApiError;
use crate::models::RequestOverrides;

use super::table::{RowKey, TableRow, TableState};

/// One screen's worth of state: a row cache plus the adapter that fills
/// it. The loading flag is the screen-level busy indicator; overlapping
/// calls share it, so the last call to finish wins (both the flag and,
/// for list loads, the cache contents).
pub struct ScreenModel<T: TableRow> {
    api: ApiSync<T>,
    table: TableState<T>,
    loading: Arc<AtomicBool>,
}

impl<T> ScreenModel<T>
where
    T: TableRow + Clone,
{
    pub fn new(api: ApiSync<T>) -> Self {
        Self {
            api,
            table: TableState::new(),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_table(api: ApiSync<T>, table: TableState<T>) -> Self {
        Self {
            api,
            table,
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn table(&self) -> &TableState<T> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableState<T> {
        &mut self.table
    }

    fn loading_callback(&self) -> impl FnMut(bool) {
        let flag = Arc::clone(&self.loading);
        move |on| flag.store(on, Ordering::SeqCst)
    }

    /// Fetch a page and replace the row cache with it.
    pub async fn load(&mut self, overrides: RequestOverrides) -> Result<(), ApiError> {
        let api = self.api.clone();
        let set_loading = self.loading_callback();
        let table = &mut self.table;
        api.get_items_sync(overrides, set_loading, |envelope| {
            table.set_rows(envelope.data.unwrap_or_default());
        })
        .await
    }

    /// Persist an edited row. On success the cached row is replaced with
    /// the server's copy (or the submitted one when the body is empty).
    /// Either way the row returns to plain viewing; on failure the cache
    /// keeps its pre-edit contents.
    pub async fn save_edit(&mut self, key: impl Into<RowKey>, item: T) -> Result<(), ApiError> {
        let key = key.into();
        let api = self.api.clone();
        let set_loading = self.loading_callback();
        let fallback = item.clone();
        let table = &mut self.table;
        let result = api
            .update_item_by_pk_sync(&key, &item, set_loading, |envelope| {
                table.update(key.clone(), envelope.data.unwrap_or(fallback));
            })
            .await;
        self.table.clear_row(key);
        result
    }

    /// Create an entity and prepend the server's copy to the cache.
    pub async fn create(&mut self, item: T) -> Result<(), ApiError> {
        let api = self.api.clone();
        let set_loading = self.loading_callback();
        let fallback = item.clone();
        let table = &mut self.table;
        let result = api
            .create_item_sync(&item, set_loading, |envelope| {
                table.add_new(envelope.data.unwrap_or(fallback));
            })
            .await;
        self.table.cancel_adding();
        result
    }

    /// Delete an entity and drop its row from the cache.
    pub async fn delete_row(&mut self, key: impl Into<RowKey>) -> Result<(), ApiError> {
        let key = key.into();
        let api = self.api.clone();
        let set_loading = self.loading_callback();
        let table = &mut self.table;
        let result = api
            .delete_item_by_pk_sync(&key, set_loading, |_| {
                table.remove(key.clone());
            })
            .await;
        self.table.clear_row(key);
        result
    }

    /// Restore a soft-deleted entity. The screen showing deleted rows
    /// drops the row from its cache once the server accepts the change.
    pub async fn restore_row(&mut self, key: impl Into<RowKey>, item: T) -> Result<(), ApiError> {
        let key = key.into();
        let api = self.api.clone();
        let set_loading = self.loading_callback();
        let table = &mut self.table;
        let result = api
            .update_item_by_pk_sync(&key, &item, set_loading, |_| {
                table.remove(key.clone());
            })
            .await;
        self.table.clear_row(key);
        result
    }
}
