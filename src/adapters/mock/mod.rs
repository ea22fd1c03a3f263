//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network dependencies or file system access.
//!
//! # Available Mocks
//!
//! - [`MockResource`] - resource client with scripted envelopes and
//!   recorded calls
//! - [`InMemoryTokenStore`] - in-memory bearer-token storage

pub mod resource;
pub mod tokens;

pub use resource::{MockResource, RecordedCall};
pub use tokens::InMemoryTokenStore;
