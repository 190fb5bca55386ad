//
//  cachet-sdk
//  resources/incidents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Incidents.
//!
//! Incidents are the timeline entries of a status page. Each carries a
//! status code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Scheduled |
//! | 1 | Investigating |
//! | 2 | Identified |
//! | 3 | Watching |
//! | 4 | Fixed |
//!
//! Creation payloads carry `name`, `message` (Markdown), `status`,
//! `visible`, and optionally a `component_id` with `component_status` to
//! flip the affected component in the same request.

use super::{Resource, ResourceActions};

/// Path template for incidents (`incidents`).
pub struct Incidents;

impl Resource for Incidents {
    const NAME: &'static str = "incidents";

    type Scope = ();

    fn collection_path(_scope: ()) -> String {
        "incidents".to_string()
    }
}

/// Actions over incidents.
pub type IncidentActions = ResourceActions<Incidents>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_paths() {
        assert_eq!(Incidents::collection_path(()), "incidents");
        assert_eq!(Incidents::item_path((), 12), "incidents/12");
    }
}
