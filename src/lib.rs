//
//  cachet-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Cachet SDK
//!
//! A client library for the [Cachet](https://cachethq.io) status page API.
//!
//! ## Overview
//!
//! This crate wraps the Cachet v1 REST API: a transport client that issues
//! requests against a configured base endpoint, resource actions that
//! translate domain operations (list, search, create, delete, ...) into
//! those requests, and a typed error carrying the originating request and
//! response for diagnostics.
//!
//! ## Features
//!
//! - **One engine, many families**: points, metrics, components, component
//!   groups, incidents, and subscribers all share the same generic
//!   [`ResourceActions`] implementation; families only contribute paths
//! - **Schema-free records**: entity schemas belong to the server, so items
//!   come back as field-name to value mappings
//! - **Opt-in listing cache**: one cached page per actions value, populated
//!   once and held until explicitly invalidated
//! - **Client-side search**: equality-or-substring filtering over a fetched
//!   page
//! - **Diagnosable failures**: every error carries the request that was
//!   attempted and the response, when one was received
//!
//! ## Module Structure
//!
//! - [`client`]: HTTP transport wrapper ([`CachetClient`])
//! - [`auth`]: Credential handling (API token, basic auth)
//! - [`resources`]: Generic resource actions and the family modules
//! - [`general`]: Unscoped endpoints (`ping`, `version`)
//! - [`common`]: Response envelopes and pagination types
//! - [`error`]: [`ConnectionError`] and friends
//!
//! ## Example
//!
//! ```rust,no_run
//! use cachet_sdk::{Auth, CachetClient, NewPoint, PageQuery, PointActions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CachetClient::new("https://status.example.com/api/v1")?
//!     .with_auth(Auth::token("9yMHsdioQosnyVK4iCVR"));
//!
//! let mut points = PointActions::new(client);
//! points.create(7, &NewPoint::new(10.5)).await?;
//!
//! let matches = points.search(7, "10", "value", 1, PageQuery::default()).await?;
//! println!("found: {:?}", matches.first());
//! # Ok(())
//! # }
//! ```

/// Credential handling for the Cachet API.
///
/// Supports the dashboard API token (`X-Cachet-Token` header) and HTTP
/// basic authentication.
pub mod auth;

/// HTTP transport wrapper.
///
/// Provides [`CachetClient`], which resolves paths against the configured
/// endpoint, applies credentials, and converts every failure into a
/// [`ConnectionError`] carrying the originating request.
pub mod client;

/// Response envelopes and pagination types.
///
/// Includes:
/// - [`Envelope`]: the `{"data": ...}` wrapper
/// - [`Page`], [`Meta`], [`Pagination`]: listing responses
/// - [`PageQuery`]: the `per_page`/`current_page` request pair
pub mod common;

/// Error types.
///
/// [`ConnectionError`] is the single transport failure kind;
/// [`BuildError`] covers client construction.
pub mod error;

/// Unscoped endpoints (`ping`, `version`).
pub mod general;

/// Generic resource actions and the per-family path templates.
///
/// Contains the [`Resource`](resources::Resource) trait, the
/// [`ResourceActions`] engine, and the family modules:
/// - [`resources::points`]: metric points (scoped by metric id)
/// - [`resources::metrics`]: metrics
/// - [`resources::components`]: components
/// - [`resources::groups`]: component groups
/// - [`resources::incidents`]: incidents
/// - [`resources::subscribers`]: subscribers
pub mod resources;

/// Re-export of the transport client and its configuration types.
pub use client::{CachetClient, ClientBuilder, RequestOptions};

/// Re-export of the credential type.
pub use auth::Auth;

/// Re-export of the error types.
pub use error::{BuildError, ConnectionError, RequestSnapshot, ResponseSnapshot};

/// Re-export of the response envelope and pagination types.
pub use common::{Envelope, Meta, Page, PageLinks, PageQuery, Pagination, Record};

/// Re-export of the resource action engine and family aliases.
pub use resources::{
    components::ComponentActions, groups::GroupActions, incidents::IncidentActions,
    metrics::MetricActions, points::NewPoint, points::PointActions,
    subscribers::SubscriberActions, ResourceActions,
};

/// Re-export of the general actions.
pub use general::GeneralActions;

/// The version of the cachet-sdk crate.
///
/// This constant is automatically set from the version in `Cargo.toml`
/// at compile time using the `CARGO_PKG_VERSION` environment variable.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
