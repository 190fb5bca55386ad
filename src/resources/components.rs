//
//  cachet-sdk
//  resources/components.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Components.
//!
//! Components are the individual pieces of infrastructure a status page
//! reports on. Each carries a status code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 1 | Operational |
//! | 2 | Performance issues |
//! | 3 | Partial outage |
//! | 4 | Major outage |
//!
//! Searching by the `status` field uses numeric equality, so
//! `search((), 4, "status", limit, query)` finds components in major
//! outage on the fetched page.

use super::{Resource, ResourceActions};

/// Path template for components (`components`).
pub struct Components;

impl Resource for Components {
    const NAME: &'static str = "components";

    type Scope = ();

    fn collection_path(_scope: ()) -> String {
        "components".to_string()
    }
}

/// Actions over components.
pub type ComponentActions = ResourceActions<Components>;
