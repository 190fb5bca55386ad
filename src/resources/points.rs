//
//  cachet-sdk
//  resources/points.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Metric points.
//!
//! Points are the timestamped numeric samples behind a metric's graph. They
//! live under their owning metric, so every operation is scoped by the
//! metric id: listings hit `metrics/{metricId}/points`, deletion hits
//! `metrics/{metricId}/points/{pointId}`.
//!
//! The point schema is service-defined; fetched points are plain
//! [`Record`](crate::Record)s. For creation, [`NewPoint`] covers the fields
//! the API accepts: the sample value and an optional explicit timestamp
//! (Unix seconds on the wire, defaulting to "now" on the server).
//!
//! # Example
//!
//! ```rust,no_run
//! use cachet_sdk::{CachetClient, NewPoint, PageQuery, PointActions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CachetClient::new("https://status.example.com/api/v1")?;
//! let mut points = PointActions::new(client);
//!
//! let stored = points.create(7, &NewPoint::new(10.5)).await?;
//! println!("stored point id: {}", stored["id"]);
//!
//! let page = points.list(7, PageQuery::default()).await?;
//! println!("{} points on this page", page.data.len());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Resource, ResourceActions};

/// Path template for metric points (`metrics/{metricId}/points`).
pub struct Points;

impl Resource for Points {
    const NAME: &'static str = "points";

    /// The owning metric's id.
    type Scope = u64;

    fn collection_path(metric_id: u64) -> String {
        format!("metrics/{metric_id}/points")
    }
}

/// Actions over metric points, scoped by metric id.
pub type PointActions = ResourceActions<Points>;

/// Creation payload for a metric point.
///
/// # Fields
///
/// * `value` - The sample value to record
/// * `timestamp` - Optional explicit sample time; serialized as Unix
///   seconds. When omitted the server stamps the point at receipt time.
///
/// # Example
///
/// ```rust
/// use cachet_sdk::NewPoint;
///
/// let now = NewPoint::new(10.5);
/// assert_eq!(serde_json::to_value(&now).unwrap(), serde_json::json!({"value": 10.5}));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct NewPoint {
    /// The sample value to record.
    pub value: f64,

    /// Optional explicit sample time, sent as Unix seconds.
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewPoint {
    /// A point stamped by the server at receipt time.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            timestamp: None,
        }
    }

    /// A point with an explicit sample time.
    pub fn at(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            value,
            timestamp: Some(timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_point_paths_are_scoped_by_metric() {
        assert_eq!(Points::collection_path(7), "metrics/7/points");
        assert_eq!(Points::item_path(7, 42), "metrics/7/points/42");
    }

    #[test]
    fn test_new_point_serializes_timestamp_as_unix_seconds() {
        let when = Utc.with_ymd_and_hms(2015, 6, 15, 12, 31, 56).unwrap();
        let point = NewPoint::at(10.5, when);
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({"value": 10.5, "timestamp": 1434371516})
        );
    }

    #[test]
    fn test_new_point_omits_missing_timestamp() {
        let point = NewPoint::new(1.0);
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({"value": 1.0})
        );
    }
}
