//
//  cachet-sdk
//  resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Resource Action Layer
//!
//! One generic engine, [`ResourceActions`], implements every operation the
//! Cachet resource families share: list, cached list, client-side search,
//! get, create, update, delete. The families themselves are zero-sized
//! path-template types implementing [`Resource`]; they contribute nothing
//! but URLs.
//!
//! ## Families
//!
//! - [`points`]: metric points, scoped by metric id (`metrics/{id}/points`)
//! - [`metrics`]: metrics (`metrics`)
//! - [`components`]: components (`components`)
//! - [`groups`]: component groups (`components/groups`)
//! - [`incidents`]: incidents (`incidents`)
//! - [`subscribers`]: subscribers (`subscribers`)
//!
//! ## Caching
//!
//! Each actions value owns a single cache slot holding one listing
//! response. The slot is populated by the first cached listing and is never
//! refreshed or invalidated automatically; there is no TTL. Subsequent
//! cached listings return the slot regardless of the page geometry they
//! ask for. Call [`ResourceActions::invalidate_cache`] to drop it, or
//! [`ResourceActions::set_cache`] to control whether plain listings route
//! through the slot at all.
//!
//! Operations that may touch the slot take `&mut self`, so a shared actions
//! value cannot race on the slot without the caller adding its own
//! synchronization.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cachet_sdk::{CachetClient, PageQuery, PointActions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CachetClient::new("https://status.example.com/api/v1")?;
//! let mut points = PointActions::new(client);
//!
//! let page = points.list(7, PageQuery::default()).await?;
//! println!("metric 7 has {} points on this page", page.data.len());
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::client::{CachetClient, RequestOptions};
use crate::common::{Envelope, Page, PageQuery, Record};
use crate::error::ConnectionError;

pub mod components;
pub mod groups;
pub mod incidents;
pub mod metrics;
pub mod points;
pub mod subscribers;

/// Path template of one resource family.
///
/// Implementors are zero-sized markers; all request logic lives in
/// [`ResourceActions`]. The `Scope` associated type is the identifier that
/// addresses the family's collection: the owning metric id for points,
/// `()` for top-level families.
///
/// # Example
///
/// ```rust
/// use cachet_sdk::resources::Resource;
///
/// struct Widgets;
///
/// impl Resource for Widgets {
///     const NAME: &'static str = "widgets";
///     type Scope = ();
///
///     fn collection_path(_scope: ()) -> String {
///         "widgets".to_string()
///     }
/// }
///
/// assert_eq!(Widgets::item_path((), 3), "widgets/3");
/// ```
pub trait Resource {
    /// Family name used in diagnostics.
    const NAME: &'static str;

    /// Identifier addressing the family's collection.
    type Scope: Copy;

    /// Path of the collection, relative to the API endpoint.
    fn collection_path(scope: Self::Scope) -> String;

    /// Path of a single item, relative to the API endpoint.
    fn item_path(scope: Self::Scope, id: u64) -> String {
        format!("{}/{id}", Self::collection_path(scope))
    }
}

/// Generic actions over one Cachet resource family.
///
/// Holds a [`CachetClient`], the cache flag, and the single-slot listing
/// cache. Every family exposes the same capability set:
///
/// | Operation | Request | Notes |
/// |-----------|---------|-------|
/// | [`list`](Self::list) | `GET {collection}?per_page&current_page` | Routes through the cache when enabled |
/// | [`list_cached`](Self::list_cached) | same | First call populates the slot |
/// | [`get`](Self::get) | `GET {item}` | |
/// | [`search`](Self::search) | one `list` | Client-side filter over the fetched page |
/// | [`create`](Self::create) | `POST {collection}` | Returns the stored representation |
/// | [`update`](Self::update) | `PUT {item}` | Returns the updated representation |
/// | [`delete`](Self::delete) | `DELETE {item}` | |
///
/// Failures are [`ConnectionError`]s from the transport, propagated
/// unchanged.
pub struct ResourceActions<R: Resource> {
    client: CachetClient,
    cached: Option<Page>,
    cache: bool,
    _family: PhantomData<R>,
}

impl<R: Resource> ResourceActions<R> {
    /// Creates an actions value over the given client.
    ///
    /// Caching starts disabled and the cache slot empty.
    pub fn new(client: CachetClient) -> Self {
        Self {
            client,
            cached: None,
            cache: false,
            _family: PhantomData,
        }
    }

    /// Toggles whether plain listings route through the cache slot.
    ///
    /// Only affects [`list`](Self::list) (and therefore
    /// [`search`](Self::search)); [`list_cached`](Self::list_cached) always
    /// uses the slot.
    pub fn set_cache(&mut self, enabled: bool) {
        self.cache = enabled;
    }

    /// Drops the cached listing, if any.
    ///
    /// The slot is never dropped automatically; this is the only way to
    /// force the next cached listing to refetch.
    pub fn invalidate_cache(&mut self) {
        self.cached = None;
    }

    /// Fetches one page of the collection listing.
    ///
    /// With caching disabled (the default) every call performs an HTTP
    /// request. With caching enabled the call behaves exactly like
    /// [`list_cached`](Self::list_cached).
    ///
    /// The returned [`Page`] preserves the server-provided item order.
    pub async fn list(
        &mut self,
        scope: R::Scope,
        query: PageQuery,
    ) -> Result<Page, ConnectionError> {
        if self.cache {
            return self.list_cached(scope, query).await;
        }
        self.fetch_page(scope, query).await
    }

    /// Returns the cached listing, fetching and storing it if absent.
    ///
    /// The first call performs the HTTP request with the given `query` and
    /// pins the result; later calls return the pinned page and ignore their
    /// `query` argument entirely. The slot survives until
    /// [`invalidate_cache`](Self::invalidate_cache) or drop.
    pub async fn list_cached(
        &mut self,
        scope: R::Scope,
        query: PageQuery,
    ) -> Result<Page, ConnectionError> {
        if let Some(page) = &self.cached {
            tracing::debug!("serving {} listing from cache", R::NAME);
            return Ok(page.clone());
        }

        let page = self.fetch_page(scope, query).await?;
        self.cached = Some(page.clone());
        Ok(page)
    }

    /// Fetches a single item by id.
    pub async fn get(&self, scope: R::Scope, id: u64) -> Result<Record, ConnectionError> {
        let envelope: Envelope<Record> = self
            .client
            .get(&R::item_path(scope, id), RequestOptions::new())
            .await?;
        Ok(envelope.data)
    }

    /// Searches the collection for items whose `by` field matches `needle`.
    ///
    /// Fetches one page via [`list`](Self::list) (so it honors the cache
    /// mode), then filters client-side. An item matches when its `by` field equals
    /// `needle`, or, for string-typed fields and a string needle, contains
    /// it as a substring. Items without the field never match; non-string
    /// fields match by equality only.
    ///
    /// With `limit == 1` the result holds at most the first match in page
    /// order; otherwise up to `limit` matches, preserving page order.
    ///
    /// The search never crosses pages: items beyond the fetched page are
    /// not considered.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cachet_sdk::{CachetClient, PageQuery, PointActions};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CachetClient::new("https://status.example.com/api/v1")?;
    /// let mut points = PointActions::new(client);
    ///
    /// let matches = points
    ///     .search(7, "10", "value", 1, PageQuery::default())
    ///     .await?;
    /// if let Some(point) = matches.first() {
    ///     println!("first point with value 10: {:?}", point);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(
        &mut self,
        scope: R::Scope,
        needle: impl Into<Value>,
        by: &str,
        limit: usize,
        query: PageQuery,
    ) -> Result<Vec<Record>, ConnectionError> {
        let needle = needle.into();
        let page = self.list(scope, query).await?;
        Ok(filter_records(&page.data, &needle, by, limit))
    }

    /// Creates an item and returns the service's stored representation.
    ///
    /// The returned record includes server-assigned fields (id, timestamps).
    pub async fn create<B: Serialize>(
        &self,
        scope: R::Scope,
        payload: &B,
    ) -> Result<Record, ConnectionError> {
        let envelope: Envelope<Record> = self
            .client
            .post(&R::collection_path(scope), payload)
            .await?;
        Ok(envelope.data)
    }

    /// Updates an item and returns the service's stored representation.
    pub async fn update<B: Serialize>(
        &self,
        scope: R::Scope,
        id: u64,
        payload: &B,
    ) -> Result<Record, ConnectionError> {
        let envelope: Envelope<Record> = self
            .client
            .put(&R::item_path(scope, id), payload)
            .await?;
        Ok(envelope.data)
    }

    /// Deletes an item.
    pub async fn delete(&self, scope: R::Scope, id: u64) -> Result<(), ConnectionError> {
        self.client.delete(&R::item_path(scope, id)).await
    }

    async fn fetch_page(
        &self,
        scope: R::Scope,
        query: PageQuery,
    ) -> Result<Page, ConnectionError> {
        self.client
            .get(
                &R::collection_path(scope),
                RequestOptions::new().queries(query.as_params()),
            )
            .await
    }
}

/// Checks whether a record's field matches the needle.
///
/// Substring containment applies only when both the field value and the
/// needle are strings; everything else falls through to strict equality.
/// A missing field never matches.
fn record_matches(record: &Record, field: &str, needle: &Value) -> bool {
    let Some(value) = record.get(field) else {
        return false;
    };
    if let (Some(haystack), Some(needle)) = (value.as_str(), needle.as_str()) {
        if haystack.contains(needle) {
            return true;
        }
    }
    value == needle
}

/// Filters records in page order, keeping at most `limit` matches.
fn filter_records(records: &[Record], needle: &Value, field: &str, limit: usize) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record_matches(record, field, needle))
        .take(limit)
        .cloned()
        .collect()
}
