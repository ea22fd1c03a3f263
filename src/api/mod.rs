//! The API synchronization adapter.
//!
//! Presents one uniform call-and-handle contract over every resource
//! client, so screen view-models write identical code regardless of
//! entity. Each capability comes in two variants:
//!
//! - **plain** (`get_items`, `create_item`, ...): reads the bearer token,
//!   brackets the call with the caller's loading callback, and returns the
//!   raw envelope (or the transport error unchanged);
//! - **sync** (`get_items_sync`, ...): calls the plain variant, converts a
//!   `success: false` envelope into [`ApiError::Logical`], and otherwise
//!   hands the envelope to the caller's success callback — so call sites
//!   can write linear happy-path code.

mod keyed;
mod sync;

pub use keyed::KeyedApiSync;
pub use sync::ApiSync;
