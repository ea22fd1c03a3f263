//! Wire types shared by every screen: request shaping and the response
//! envelope.

pub mod envelope;
pub mod request;

pub use envelope::Envelope;
pub use request::{
    build_request, Filter, Paginator, RequestBody, RequestOverrides, Search, SortDirection,
    Sorting, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_BODY, UNBOUNDED_PAGE_SIZE,
};
