//! Seamline - client-side core for the garment factory operations dashboard
//!
//! Wire types, per-screen table state, and the API synchronization
//! adapter every list screen is built on.

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod state;
pub mod traits;
