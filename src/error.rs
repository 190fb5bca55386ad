//
//  cachet-sdk
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Error Types for the Cachet SDK
//!
//! This module provides the error types surfaced by the SDK. There is exactly
//! one failure kind at the transport layer, [`ConnectionError`], covering
//! network failures, non-2xx responses, and undecodable bodies. Every
//! `ConnectionError` carries a snapshot of the request that was attempted and,
//! when the server replied, a snapshot of the response.
//!
//! ## Overview
//!
//! - [`ConnectionError`] - Transport failure with full request/response context
//! - [`RequestSnapshot`] - The method, URL, and body of the attempted request
//! - [`ResponseSnapshot`] - The status and raw body of the received response
//! - [`BuildError`] - Client construction failure (invalid endpoint, etc.)
//!
//! ## Example
//!
//! ```rust
//! use cachet_sdk::ConnectionError;
//!
//! fn report(err: &ConnectionError) {
//!     eprintln!("{} failed: {}", err.request(), err);
//!     if let Some(response) = err.response() {
//!         eprintln!("server replied {} with: {}", response.status(), response.body());
//!     }
//! }
//! ```
//!
//! ## Notes
//!
//! - Snapshots are captured at failure time and never mutated afterwards.
//! - "Not found" and "server error" are the same error kind at this layer;
//!   inspect [`ConnectionError::status`] to distinguish response classes.

use std::fmt;

use reqwest::{Method, StatusCode};
use thiserror::Error;
use url::Url;

/// Immutable description of a request the client attempted to send.
///
/// Captured before the request leaves the client so that it is available
/// even when the connection itself fails.
///
/// # Fields
///
/// * `method` - The HTTP method of the request
/// * `url` - The fully resolved URL, including query parameters
/// * `body` - The JSON body, if one was attached
///
/// # Example
///
/// ```rust
/// use cachet_sdk::ConnectionError;
///
/// fn describe(err: &ConnectionError) -> String {
///     let request = err.request();
///     format!("{} {}", request.method(), request.url())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    method: Method,
    url: Url,
    body: Option<serde_json::Value>,
}

impl RequestSnapshot {
    pub(crate) fn new(method: Method, url: Url, body: Option<serde_json::Value>) -> Self {
        Self { method, url, body }
    }

    /// The HTTP method of the attempted request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The fully resolved URL of the attempted request.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The JSON body attached to the request, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

impl fmt::Display for RequestSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Immutable description of a response the server sent back.
///
/// Present on a [`ConnectionError`] only when the server actually replied;
/// a refused connection or DNS failure produces no snapshot.
///
/// # Fields
///
/// * `status` - The HTTP status code of the response
/// * `body` - The raw response body as received
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    status: StatusCode,
    body: String,
}

impl ResponseSnapshot {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// The HTTP status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw response body as received from the server.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Transport failure raised by [`CachetClient`](crate::CachetClient).
///
/// `ConnectionError` is the single error kind propagated by every API
/// operation. It covers three failure scenarios:
///
/// | Scenario | `response()` | `source()` |
/// |----------|--------------|------------|
/// | Network failure (refused, DNS, timeout) | `None` | `reqwest::Error` |
/// | Non-2xx status | `Some` | `None` |
/// | Undecodable 2xx body | `Some` | `serde_json::Error` |
///
/// The originating request is always attached and accessible via
/// [`request`](Self::request); resource actions propagate the error
/// unchanged, so the context survives all the way to the caller.
///
/// # Example
///
/// ```rust
/// use cachet_sdk::ConnectionError;
/// use reqwest::StatusCode;
///
/// fn is_not_found(err: &ConnectionError) -> bool {
///     err.status() == Some(StatusCode::NOT_FOUND)
/// }
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConnectionError {
    message: String,
    request: RequestSnapshot,
    response: Option<ResponseSnapshot>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConnectionError {
    /// The request never made it to the server.
    pub(crate) fn transport(request: RequestSnapshot, source: reqwest::Error) -> Self {
        Self {
            message: format!("request to {} failed: {source}", request.url()),
            request,
            response: None,
            source: Some(Box::new(source)),
        }
    }

    /// The server replied with a non-2xx status.
    pub(crate) fn bad_status(
        request: RequestSnapshot,
        response: ResponseSnapshot,
        message: String,
    ) -> Self {
        Self {
            message,
            request,
            response: Some(response),
            source: None,
        }
    }

    /// The server replied 2xx but the body did not decode.
    pub(crate) fn decode(
        request: RequestSnapshot,
        response: ResponseSnapshot,
        source: serde_json::Error,
    ) -> Self {
        Self {
            message: format!("failed to decode response from {}: {source}", request.url()),
            request,
            response: Some(response),
            source: Some(Box::new(source)),
        }
    }

    /// The request body could not be serialized before sending.
    pub(crate) fn encode(request: RequestSnapshot, source: serde_json::Error) -> Self {
        Self {
            message: format!("failed to encode request body for {}: {source}", request.url()),
            request,
            response: None,
            source: Some(Box::new(source)),
        }
    }

    /// The request that was attempted.
    ///
    /// Always present, even when the connection itself failed.
    pub fn request(&self) -> &RequestSnapshot {
        &self.request
    }

    /// The response the server sent back, if one was received.
    ///
    /// `None` for pure transport failures (connection refused, DNS errors,
    /// timeouts); `Some` for non-2xx statuses and undecodable bodies.
    pub fn response(&self) -> Option<&ResponseSnapshot> {
        self.response.as_ref()
    }

    /// The HTTP status of the received response, if one was received.
    ///
    /// Convenience accessor for callers that want to distinguish response
    /// classes (404 vs 5xx) without walking the snapshot.
    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(ResponseSnapshot::status)
    }
}

/// Client construction failure.
///
/// Returned by [`ClientBuilder::build`](crate::ClientBuilder::build) when the
/// configured endpoint is not a valid absolute URL or the underlying HTTP
/// client cannot be constructed. Kept separate from [`ConnectionError`] so
/// that the transport layer retains a single propagating failure kind.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid Cachet endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The configured endpoint cannot carry path segments (e.g. a `data:` URL).
    #[error("Cachet endpoint cannot serve as a base URL")]
    EndpointNotABase,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(path: &str) -> RequestSnapshot {
        RequestSnapshot::new(
            Method::GET,
            Url::parse(&format!("https://status.example.com/api/v1/{path}")).unwrap(),
            None,
        )
    }

    #[test]
    fn test_request_snapshot_display() {
        let request = snapshot("ping");
        assert_eq!(
            request.to_string(),
            "GET https://status.example.com/api/v1/ping"
        );
    }

    #[test]
    fn test_status_error_carries_response() {
        let response = ResponseSnapshot::new(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        let err = ConnectionError::bad_status(snapshot("ping"), response, "API error (500)".into());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.response().unwrap().body(), "boom");
        assert_eq!(err.to_string(), "API error (500)");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let response = ResponseSnapshot::new(StatusCode::OK, "not json".into());
        let err = ConnectionError::decode(snapshot("ping"), response, bad);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), Some(StatusCode::OK));
    }
}
