//
//  cachet-sdk
//  common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination types for Cachet listing responses.
//!
//! Cachet listings return one page at a time, wrapped as
//! `{"data": [...], "meta": {"pagination": {...}}}`. The request side is a
//! `per_page`/`current_page` query-parameter pair; the response side echoes
//! the page geometry and links to neighboring pages.
//!
//! # Example
//!
//! ```rust
//! use cachet_sdk::Page;
//!
//! let json = r#"{
//!     "data": [{"id": 1, "value": 10.5}],
//!     "meta": {"pagination": {
//!         "total": 30, "count": 1, "per_page": 1,
//!         "current_page": 1, "total_pages": 30,
//!         "links": {"next_page": "...?current_page=2", "previous_page": null}
//!     }}
//! }"#;
//!
//! let page: Page = serde_json::from_str(json).unwrap();
//! assert_eq!(page.data.len(), 1);
//! assert!(page.has_next());
//! ```
//!
//! # Notes
//!
//! - `meta` is optional; some endpoints and older servers omit it.
//! - Page numbers are 1-indexed (the first page is page 1).

use serde::{Deserialize, Serialize};

use super::Record;

/// Default page size requested when the caller does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 1000;

/// The `per_page`/`current_page` pair sent with listing requests.
///
/// Implements `Default` with a page size of 1000 and page 1, so the common
/// "give me everything reasonable" call reads as
/// `actions.list(scope, PageQuery::default())`.
///
/// # Example
///
/// ```rust
/// use cachet_sdk::PageQuery;
///
/// let query = PageQuery::default();
/// assert_eq!(query.per_page, 1000);
/// assert_eq!(query.page, 1);
///
/// let third = PageQuery::new(50, 3);
/// assert_eq!(third.page, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Number of items to request per page (`per_page`).
    pub per_page: u32,
    /// 1-indexed page number to request (`current_page`).
    pub page: u32,
}

impl PageQuery {
    /// Creates a query for the given page size and page number.
    pub fn new(per_page: u32, page: u32) -> Self {
        Self { per_page, page }
    }

    /// Renders the query-parameter pairs sent on the wire.
    pub(crate) fn as_params(&self) -> Vec<(String, String)> {
        vec![
            ("per_page".to_string(), self.per_page.to_string()),
            ("current_page".to_string(), self.page.to_string()),
        ]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: 1,
        }
    }
}

/// One page of a Cachet listing.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `data` | `Vec<Record>` | Items in server-provided order |
/// | `meta` | `Option<Meta>` | Pagination state, when the server sends it |
///
/// The items are kept as raw [`Record`]s because the entity schema belongs
/// to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Items in the current page, in server-provided order.
    pub data: Vec<Record>,

    /// Pagination state, when the server sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Page {
    /// Checks whether the server indicated a following page.
    ///
    /// Returns `false` when the `meta` block is absent.
    pub fn has_next(&self) -> bool {
        self.meta
            .as_ref()
            .and_then(|meta| meta.pagination.as_ref())
            .is_some_and(Pagination::has_next)
    }
}

/// The `meta` block of a listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination state for the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Pagination state echoed by the server.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `total` | Total items across all pages |
/// | `count` | Items in the current page |
/// | `per_page` | Requested page size |
/// | `current_page` | 1-indexed current page number |
/// | `total_pages` | Total number of pages |
/// | `links` | URLs of the neighboring pages |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u32,

    /// Number of items in the current page.
    #[serde(default)]
    pub count: u32,

    /// Requested page size.
    #[serde(default)]
    pub per_page: u32,

    /// 1-indexed current page number.
    #[serde(default)]
    pub current_page: u32,

    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,

    /// URLs of the neighboring pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

impl Pagination {
    /// Checks whether a following page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The 1-indexed number of the following page, if one exists.
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }
}

/// Links to the pages neighboring the current one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLinks {
    /// URL of the next page, if one exists.
    #[serde(default)]
    pub next_page: Option<String>,

    /// URL of the previous page, if one exists.
    #[serde(default)]
    pub previous_page: Option<String>,
}
