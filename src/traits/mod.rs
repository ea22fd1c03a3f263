//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for core functionality,
//! enabling dependency injection, mocking, and better testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`BasicResource`] - mandatory per-entity CRUD capability set
//! - [`KeyedResource`] - optional foreign-column capability set
//! - [`TokenStore`] - bearer-token storage and retrieval

pub mod http;
pub mod resource;
pub mod tokens;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use resource::{BasicResource, FieldKey, KeyedResource};
pub use tokens::{StoredToken, TokenStore, TokenStoreError};
