//
//  cachet-sdk
//  resources/subscribers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Subscribers.
//!
//! Subscribers are the email addresses notified when incidents are created.
//! The API supports listing, subscribing (`POST` with an `email` field),
//! and unsubscribing (`DELETE`); subscribers are never updated in place.

use super::{Resource, ResourceActions};

/// Path template for subscribers (`subscribers`).
pub struct Subscribers;

impl Resource for Subscribers {
    const NAME: &'static str = "subscribers";

    type Scope = ();

    fn collection_path(_scope: ()) -> String {
        "subscribers".to_string()
    }
}

/// Actions over subscribers.
pub type SubscriberActions = ResourceActions<Subscribers>;
