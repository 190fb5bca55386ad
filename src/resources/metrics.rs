//
//  cachet-sdk
//  resources/metrics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Metrics.
//!
//! Metrics are the top-level graphs on a status page; each aggregates the
//! points recorded under it. Creation payloads carry fields such as `name`,
//! `suffix`, and `default_value`; the schema belongs to the server, so
//! payloads are supplied by the caller and results come back as
//! [`Record`](crate::Record)s.
//!
//! # Example
//!
//! ```rust,no_run
//! use cachet_sdk::{CachetClient, MetricActions, PageQuery};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CachetClient::new("https://status.example.com/api/v1")?;
//! let mut metrics = MetricActions::new(client);
//!
//! let created = metrics
//!     .create((), &json!({"name": "Response time", "suffix": "ms", "default_value": 0}))
//!     .await?;
//! println!("metric id: {}", created["id"]);
//! # Ok(())
//! # }
//! ```

use super::{Resource, ResourceActions};

/// Path template for metrics (`metrics`).
pub struct Metrics;

impl Resource for Metrics {
    const NAME: &'static str = "metrics";

    type Scope = ();

    fn collection_path(_scope: ()) -> String {
        "metrics".to_string()
    }
}

/// Actions over metrics.
pub type MetricActions = ResourceActions<Metrics>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_paths() {
        assert_eq!(Metrics::collection_path(()), "metrics");
        assert_eq!(Metrics::item_path((), 3), "metrics/3");
    }
}
