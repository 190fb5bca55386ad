//
//  cachet-sdk
//  general.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! General endpoints.
//!
//! The two unscoped endpoints every Cachet installation exposes: `ping`
//! (liveness probe, answers `Pong!`) and `version` (the running Cachet
//! version string).

use crate::client::{CachetClient, RequestOptions};
use crate::common::Envelope;
use crate::error::ConnectionError;

/// Actions for the unscoped general endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use cachet_sdk::{CachetClient, GeneralActions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CachetClient::new("https://status.example.com/api/v1")?;
/// let general = GeneralActions::new(client);
///
/// assert_eq!(general.ping().await?, "Pong!");
/// println!("running Cachet {}", general.version().await?);
/// # Ok(())
/// # }
/// ```
pub struct GeneralActions {
    client: CachetClient,
}

impl GeneralActions {
    /// Creates the actions value over the given client.
    pub fn new(client: CachetClient) -> Self {
        Self { client }
    }

    /// Probes the API for liveness.
    ///
    /// A healthy installation answers `Pong!`. Any failure (unreachable
    /// host, non-2xx reply, unexpected body) surfaces as the usual
    /// [`ConnectionError`] with the request attached.
    pub async fn ping(&self) -> Result<String, ConnectionError> {
        let envelope: Envelope<String> = self.client.get("ping", RequestOptions::new()).await?;
        Ok(envelope.data)
    }

    /// Fetches the Cachet version the server is running.
    pub async fn version(&self) -> Result<String, ConnectionError> {
        let envelope: Envelope<String> = self.client.get("version", RequestOptions::new()).await?;
        Ok(envelope.data)
    }
}
