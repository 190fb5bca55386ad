//
//  cachet-sdk
//  resources/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Component groups.
//!
//! Groups collect related components under one heading on the status page.
//! The collection lives under the components namespace
//! (`components/groups`), but group ids are addressed directly:
//! `components/groups/{groupId}`.

use super::{Resource, ResourceActions};

/// Path template for component groups (`components/groups`).
pub struct Groups;

impl Resource for Groups {
    const NAME: &'static str = "groups";

    type Scope = ();

    fn collection_path(_scope: ()) -> String {
        "components/groups".to_string()
    }
}

/// Actions over component groups.
pub type GroupActions = ResourceActions<Groups>;
