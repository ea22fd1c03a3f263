//! Request shaping for list endpoints.
//!
//! Every list screen sends the same four-part body: a filter, a paginator,
//! a search and a sorting block. Callers supply only the parts they care
//! about as [`RequestOverrides`]; [`build_request`] fills the rest from the
//! process-wide [`DEFAULT_REQUEST_BODY`].
//!
//! Precedence is deliberately simple: each **top-level** block is replaced
//! wholesale when an override is present, otherwise the default block is
//! used. Blocks are never merged field-by-field, so overriding `search`
//! alone keeps the default `paginator`, `filter` and `sorting` untouched.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Page size value meaning "return all rows".
///
/// Screens rely on this to build client-side joins across resources; there
/// is no server-side join capability at this layer.
pub const UNBOUNDED_PAGE_SIZE: i64 = -1;

/// Default page size for paged list views.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Pagination block. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
}

impl Paginator {
    pub fn new(page: u32, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Paginator requesting every row in one page.
    pub fn unbounded() -> Self {
        Self {
            page: 1,
            page_size: UNBOUNDED_PAGE_SIZE,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.page_size == UNBOUNDED_PAGE_SIZE
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Column filter block: a field name, a set of numeric ids and a set of
/// status strings (used by the soft-delete views to select active rows).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub items: Vec<i64>,
    pub status: Vec<String>,
}

/// Free-text search block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub field: String,
    pub term: String,
}

/// Sort direction, serialized as `asc`/`desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sorting block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub column: String,
    pub direction: SortDirection,
}

impl Default for Sorting {
    fn default() -> Self {
        Self {
            column: "id".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Complete request body sent to list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    pub filter: Filter,
    pub paginator: Paginator,
    pub search: Search,
    pub sorting: Sorting,
}

/// Process-wide fallback request body.
pub static DEFAULT_REQUEST_BODY: Lazy<RequestBody> = Lazy::new(RequestBody::default);

/// Caller-supplied partial request body. Absent blocks fall back to
/// [`DEFAULT_REQUEST_BODY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    pub filter: Option<Filter>,
    pub paginator: Option<Paginator>,
    pub search: Option<Search>,
    pub sorting: Option<Sorting>,
}

impl RequestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = Some(paginator);
        self
    }

    pub fn with_search(mut self, search: Search) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = Some(sorting);
        self
    }
}

/// Build a full [`RequestBody`] from caller overrides.
///
/// Each top-level block is taken from `overrides` when present and from
/// [`DEFAULT_REQUEST_BODY`] otherwise. No recursive merging happens.
pub fn build_request(overrides: RequestOverrides) -> RequestBody {
    let defaults = DEFAULT_REQUEST_BODY.clone();
    RequestBody {
        filter: overrides.filter.unwrap_or(defaults.filter),
        paginator: overrides.paginator.unwrap_or(defaults.paginator),
        search: overrides.search.unwrap_or(defaults.search),
        sorting: overrides.sorting.unwrap_or(defaults.sorting),
    }
}
