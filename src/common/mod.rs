//
//  cachet-sdk
//  common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Common Response Types
//!
//! Shared types for unwrapping Cachet API responses. Every Cachet endpoint
//! wraps its payload in a `data` key; listings additionally carry a `meta`
//! block with pagination state.
//!
//! ## Overview
//!
//! - [`Envelope`] - Single-item wrapper (`{"data": ...}`)
//! - [`Record`] - A service-defined object; the schema is owned by the server
//! - [`Page`] - One page of a listing (`data` array plus `meta`)
//! - [`Meta`], [`Pagination`], [`PageLinks`] - Pagination state
//! - [`PageQuery`] - The `per_page`/`current_page` request pair
//!
//! ## Example
//!
//! ```rust
//! use cachet_sdk::{Envelope, Record};
//!
//! let json = r#"{"data": {"id": 1, "value": "10"}}"#;
//! let envelope: Envelope<Record> = serde_json::from_str(json).unwrap();
//! assert_eq!(envelope.data["value"], "10");
//! ```

use serde::{Deserialize, Serialize};

mod pagination;

pub use pagination::*;

/// A service-defined object, represented as a field-name to value mapping.
///
/// Cachet's entity schemas (points, metrics, components, ...) are defined by
/// the server and vary across versions, so the client does not pin them to
/// fixed structs.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Single-item wrapper for Cachet API responses.
///
/// Every non-listing Cachet endpoint returns its payload under a `data` key:
/// `{"data": {...}}` for entities, `{"data": "Pong!"}` for ping. `Envelope`
/// deserializes that wrapper so callers receive the payload directly.
///
/// # Type Parameters
///
/// - `T` - The type of the wrapped payload
///
/// # Example
///
/// ```rust
/// use cachet_sdk::Envelope;
///
/// let json = r#"{"data": "Pong!"}"#;
/// let envelope: Envelope<String> = serde_json::from_str(json).unwrap();
/// assert_eq!(envelope.data, "Pong!");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
}
