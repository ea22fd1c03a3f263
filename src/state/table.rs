//! Per-screen table state container.
//!
//! Holds the row cache and per-row lifecycle flags for one screen. Every
//! operation is a total, synchronous function over the container's own
//! state; the container performs no network I/O and never triggers a
//! refetch by itself.
//!
//! Mutations go through a reducer: [`TableAction`] describes the change,
//! [`TableState::apply`] executes it deterministically. The named methods
//! are thin wrappers that build the action and apply it, so view-models
//! can use either form.
//!
//! Per-row lifecycle is a single tagged union ([`RowLifecycle`]), so a row
//! is never simultaneously "editing" and "confirming delete". Whether two
//! *different* rows may be editing at once is governed by [`EditPolicy`].

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Paginator;

/// String identifier locating a cached row, derived from the entity's
/// primary key.
pub type RowKey = String;

/// A cacheable table row.
pub trait TableRow {
    fn row_key(&self) -> RowKey;
}

/// Lifecycle of one row. A row without an entry is simply being viewed.
#[derive(Debug, Clone, PartialEq)]
pub enum RowLifecycle<R> {
    /// The row is being edited; the caller may stash its draft here.
    Editing { draft: Option<R> },
    /// A delete confirmation is pending for the row.
    ConfirmingDelete,
    /// A restore confirmation is pending for the row.
    ConfirmingRestore,
}

/// Pending "add child under parent" context, used by expandable
/// sub-tables (e.g. import lots nested under a product).
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdd<R> {
    pub parent_key: RowKey,
    pub payload: R,
}

/// Whether starting an edit on one row cancels edits on other rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPolicy {
    /// At most one row is editing at a time; starting a new edit clears
    /// any other row's draft.
    Exclusive,
    /// Several rows may hold drafts at once.
    #[default]
    MultiDraft,
}

/// A state mutation, applied by [`TableState::apply`].
pub enum TableAction<R> {
    /// Replace the row cache wholesale.
    SetRows(Vec<R>),
    /// Transform the current cache in place (client-side sort toggling).
    MapRows(Box<dyn FnOnce(Vec<R>) -> Vec<R>>),
    /// Prepend a row. No uniqueness check is performed; a caller reusing
    /// an existing key gets a duplicate.
    AddNew(R),
    /// Replace the first row whose key matches, preserving position.
    /// No-op when absent.
    Update { key: RowKey, row: R },
    /// Remove the first row whose key matches. No-op when absent.
    Remove { key: RowKey },
    StartEditing { key: RowKey, draft: Option<R> },
    CancelEditing,
    StartDeleting { key: RowKey },
    CancelDeleting,
    StartRestoring { key: RowKey },
    CancelRestoring,
    /// Clear whatever lifecycle state one row holds.
    ClearRow { key: RowKey },
    StartAdding { parent_key: RowKey, payload: R },
    CancelAdding,
    SetExpanded { key: RowKey, expanded: bool },
    SetPaginator(Paginator),
}

/// Row cache and lifecycle flags for one screen.
#[derive(Debug, Clone)]
pub struct TableState<R: TableRow> {
    rows: Vec<R>,
    lifecycle: BTreeMap<RowKey, RowLifecycle<R>>,
    adding: Option<PendingAdd<R>>,
    expanded: BTreeSet<RowKey>,
    paginator: Paginator,
    edit_policy: EditPolicy,
}

impl<R: TableRow> Default for TableState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TableRow> TableState<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            lifecycle: BTreeMap::new(),
            adding: None,
            expanded: BTreeSet::new(),
            paginator: Paginator::default(),
            edit_policy: EditPolicy::default(),
        }
    }

    pub fn with_edit_policy(edit_policy: EditPolicy) -> Self {
        Self {
            edit_policy,
            ..Self::new()
        }
    }

    /// Apply one action to the state.
    pub fn apply(&mut self, action: TableAction<R>) {
        match action {
            TableAction::SetRows(rows) => self.rows = rows,
            TableAction::MapRows(transform) => {
                let rows = std::mem::take(&mut self.rows);
                self.rows = transform(rows);
            }
            TableAction::AddNew(row) => self.rows.insert(0, row),
            TableAction::Update { key, row } => {
                if let Some(slot) = self.rows.iter_mut().find(|r| r.row_key() == key) {
                    *slot = row;
                }
            }
            TableAction::Remove { key } => {
                if let Some(pos) = self.rows.iter().position(|r| r.row_key() == key) {
                    self.rows.remove(pos);
                }
            }
            TableAction::StartEditing { key, draft } => {
                if self.edit_policy == EditPolicy::Exclusive {
                    self.lifecycle
                        .retain(|_, l| !matches!(l, RowLifecycle::Editing { .. }));
                }
                self.lifecycle.insert(key, RowLifecycle::Editing { draft });
            }
            TableAction::CancelEditing => self
                .lifecycle
                .retain(|_, l| !matches!(l, RowLifecycle::Editing { .. })),
            TableAction::StartDeleting { key } => {
                self.lifecycle.insert(key, RowLifecycle::ConfirmingDelete);
            }
            TableAction::CancelDeleting => self
                .lifecycle
                .retain(|_, l| !matches!(l, RowLifecycle::ConfirmingDelete)),
            TableAction::StartRestoring { key } => {
                self.lifecycle.insert(key, RowLifecycle::ConfirmingRestore);
            }
            TableAction::CancelRestoring => self
                .lifecycle
                .retain(|_, l| !matches!(l, RowLifecycle::ConfirmingRestore)),
            TableAction::ClearRow { key } => {
                self.lifecycle.remove(&key);
            }
            TableAction::StartAdding {
                parent_key,
                payload,
            } => {
                self.adding = Some(PendingAdd {
                    parent_key,
                    payload,
                });
            }
            TableAction::CancelAdding => self.adding = None,
            TableAction::SetExpanded { key, expanded } => {
                if expanded {
                    self.expanded.insert(key);
                } else {
                    self.expanded.remove(&key);
                }
            }
            TableAction::SetPaginator(paginator) => self.paginator = paginator,
        }
    }

    // --- convenience wrappers over `apply` ---

    /// Replace the row cache wholesale.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.apply(TableAction::SetRows(rows));
    }

    /// Transform the current cache in place.
    pub fn map_rows(&mut self, transform: impl FnOnce(Vec<R>) -> Vec<R> + 'static) {
        self.apply(TableAction::MapRows(Box::new(transform)));
    }

    /// Prepend a row to the cache.
    pub fn add_new(&mut self, row: R) {
        self.apply(TableAction::AddNew(row));
    }

    /// Replace the first row whose key matches, preserving position.
    pub fn update(&mut self, key: impl Into<RowKey>, row: R) {
        self.apply(TableAction::Update {
            key: key.into(),
            row,
        });
    }

    /// Remove the first row whose key matches.
    pub fn remove(&mut self, key: impl Into<RowKey>) {
        self.apply(TableAction::Remove { key: key.into() });
    }

    pub fn start_editing(&mut self, key: impl Into<RowKey>) {
        self.apply(TableAction::StartEditing {
            key: key.into(),
            draft: None,
        });
    }

    /// Start editing with a caller-owned draft stashed on the row.
    pub fn start_editing_with_draft(&mut self, key: impl Into<RowKey>, draft: R) {
        self.apply(TableAction::StartEditing {
            key: key.into(),
            draft: Some(draft),
        });
    }

    pub fn cancel_editing(&mut self) {
        self.apply(TableAction::CancelEditing);
    }

    pub fn start_deleting(&mut self, key: impl Into<RowKey>) {
        self.apply(TableAction::StartDeleting { key: key.into() });
    }

    pub fn cancel_deleting(&mut self) {
        self.apply(TableAction::CancelDeleting);
    }

    pub fn start_restoring(&mut self, key: impl Into<RowKey>) {
        self.apply(TableAction::StartRestoring { key: key.into() });
    }

    pub fn cancel_restoring(&mut self) {
        self.apply(TableAction::CancelRestoring);
    }

    /// Clear whatever lifecycle state one row holds, returning it to
    /// plain viewing.
    pub fn clear_row(&mut self, key: impl Into<RowKey>) {
        self.apply(TableAction::ClearRow { key: key.into() });
    }

    /// Record a pending "add child under parent" context.
    pub fn start_adding(&mut self, parent_key: impl Into<RowKey>, payload: R) {
        self.apply(TableAction::StartAdding {
            parent_key: parent_key.into(),
            payload,
        });
    }

    pub fn cancel_adding(&mut self) {
        self.apply(TableAction::CancelAdding);
    }

    /// Toggle a row's membership in the expanded set.
    pub fn set_expanded(&mut self, expanded: bool, key: impl Into<RowKey>) {
        self.apply(TableAction::SetExpanded {
            key: key.into(),
            expanded,
        });
    }

    /// Replace the paginator. Does NOT trigger a refetch; reacting to the
    /// change is the view-model's job.
    pub fn set_paginator(&mut self, paginator: Paginator) {
        self.apply(TableAction::SetPaginator(paginator));
    }

    // --- predicates and accessors ---

    pub fn is_editing(&self, key: &str) -> bool {
        matches!(self.lifecycle.get(key), Some(RowLifecycle::Editing { .. }))
    }

    pub fn is_deleting(&self, key: &str) -> bool {
        matches!(
            self.lifecycle.get(key),
            Some(RowLifecycle::ConfirmingDelete)
        )
    }

    pub fn is_restoring(&self, key: &str) -> bool {
        matches!(
            self.lifecycle.get(key),
            Some(RowLifecycle::ConfirmingRestore)
        )
    }

    pub fn is_adding(&self, parent_key: &str) -> bool {
        self.adding
            .as_ref()
            .map(|pending| pending.parent_key == parent_key)
            .unwrap_or(false)
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The first cached row whose key matches, if any.
    pub fn row(&self, key: &str) -> Option<&R> {
        self.rows.iter().find(|r| r.row_key() == key)
    }

    /// The draft stashed when editing started, if any.
    pub fn editing_draft(&self, key: &str) -> Option<&R> {
        match self.lifecycle.get(key) {
            Some(RowLifecycle::Editing { draft }) => draft.as_ref(),
            _ => None,
        }
    }

    pub fn pending_add(&self) -> Option<&PendingAdd<R>> {
        self.adding.as_ref()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }
}
