//
//  cachet-sdk
//  auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! Credential handling for the Cachet API. Cachet supports two schemes:
//!
//! - **API token**: the token generated on the dashboard, sent as the
//!   `X-Cachet-Token` header. This is the recommended method.
//! - **Basic authentication**: the dashboard account's email and password,
//!   sent as standard HTTP basic auth.
//!
//! Read endpoints are public on most installations; write endpoints
//! (create, update, delete) require credentials.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cachet_sdk::{Auth, CachetClient};
//!
//! let client = CachetClient::new("https://status.example.com/api/v1")?
//!     .with_auth(Auth::token("9yMHsdioQosnyVK4iCVR"));
//! # Ok::<(), cachet_sdk::BuildError>(())
//! ```

use reqwest::RequestBuilder;

/// Header carrying the Cachet API token.
pub const TOKEN_HEADER: &str = "X-Cachet-Token";

/// Credentials applied to every outgoing request.
///
/// # Variants
///
/// * `Token` - Dashboard API token, sent as the `X-Cachet-Token` header
/// * `Basic` - Dashboard account email and password, sent as HTTP basic auth
///
/// # Example
///
/// ```rust
/// use cachet_sdk::Auth;
///
/// let token = Auth::token("9yMHsdioQosnyVK4iCVR");
/// let basic = Auth::basic("admin@example.com", "secret");
/// ```
#[derive(Debug, Clone)]
pub enum Auth {
    /// Dashboard API token authentication.
    ///
    /// The token is available from the team member's profile page on the
    /// Cachet dashboard.
    Token(String),

    /// Basic HTTP authentication with the dashboard account credentials.
    ///
    /// Use this method only when token authentication is not available;
    /// it exposes the account password to every request.
    Basic {
        /// The dashboard account email.
        email: String,
        /// The dashboard account password.
        password: String,
    },
}

impl Auth {
    /// Creates token credentials from any string-like value.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Creates basic credentials from the dashboard email and password.
    pub fn basic(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Applies these credentials to an outgoing request.
    ///
    /// Token credentials become an `X-Cachet-Token` header; basic
    /// credentials become an `Authorization: Basic` header.
    pub(crate) fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Token(token) => request.header(TOKEN_HEADER, token),
            Self::Basic { email, password } => request.basic_auth(email, Some(password)),
        }
    }
}
