//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters implementing the traits
//! defined in `crate::traits`, plus test doubles under [`mock`].
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`RestResource`] - generic REST resource client over any `HttpClient`
//! - [`FileTokenStore`] - file-based bearer-token storage
//!
//! # Mock Implementations
//!
//! - [`mock::MockResource`] - scripted envelopes + recorded calls
//! - [`mock::InMemoryTokenStore`] - in-memory token storage

pub mod file_tokens;
pub mod mock;
pub mod reqwest_http;
pub mod rest_resource;

pub use file_tokens::FileTokenStore;
pub use mock::{InMemoryTokenStore, MockResource};
pub use reqwest_http::ReqwestHttpClient;
pub use rest_resource::RestResource;
