//! Per-screen state containers.
//!
//! This module contains the state layer every list screen is built on:
//! - `TableState`: row cache + per-row lifecycle flags for one screen
//! - `ScreenModel`: thin view-model composing a `TableState` with an
//!   `ApiSync` adapter

pub mod screen;
pub mod table;

pub use screen::ScreenModel;
pub use table::{
    EditPolicy, PendingAdd, RowKey, RowLifecycle, TableAction, TableRow, TableState,
};
