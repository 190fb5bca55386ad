//
//  cachet-sdk
//  client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/05/18.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Cachet API
//!
//! This module provides the core HTTP client for interacting with a Cachet
//! status page. It handles endpoint resolution, authentication header
//! injection, and request/response serialization.
//!
//! ## Features
//!
//! - Base-endpoint configuration with URL validation
//! - Authentication header injection (`X-Cachet-Token` or basic auth)
//! - JSON serialization/deserialization
//! - Typed failures carrying the originating request and response
//!
//! ## Example
//!
//! ```rust,no_run
//! use cachet_sdk::{Auth, CachetClient};
//!
//! let client = CachetClient::builder("https://status.example.com/api/v1")
//!     .auth(Auth::token("9yMHsdioQosnyVK4iCVR"))
//!     .build()?;
//! # Ok::<(), cachet_sdk::BuildError>(())
//! ```

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::Auth;
use crate::error::{BuildError, ConnectionError, RequestSnapshot, ResponseSnapshot};

/// Parses a Cachet API error response and extracts a human-readable message.
///
/// Cachet returns errors in the format:
/// ```json
/// {"errors": [{"title": "...", "detail": "Human readable message"}]}
/// ```
///
/// Some endpoints and proxies instead return:
/// ```json
/// {"message": "Human readable message"}
/// ```
///
/// This function attempts to extract the message from either format.
/// If parsing fails, it returns a generic message with the raw body.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
///
/// # Returns
///
/// A clean, user-friendly message string.
pub fn format_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        // Cachet format: {"errors": [{"title": "...", "detail": "..."}]}
        if let Some(error) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
        {
            if let Some(detail) = error.get("detail").and_then(|d| d.as_str()) {
                return detail.to_string();
            }
            if let Some(title) = error.get("title").and_then(|t| t.as_str()) {
                return title.to_string();
            }
        }

        // Simple message format: {"message": "..."}
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    // Fallback to raw body if parsing fails
    format!("API error ({status}): {body}")
}

/// Options attached to a single [`CachetClient::call`].
///
/// Recognized pieces mirror the transport contract: `query` pairs are
/// appended as URL query parameters, and `json` becomes the serialized
/// request body.
///
/// # Example
///
/// ```rust
/// use cachet_sdk::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .query("per_page", 1000)
///     .query("current_page", 1)
///     .json(json!({"value": 10.5}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    json: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Creates an empty options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends each pair of an iterable as query parameters.
    pub fn queries<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// Sets the JSON body payload.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.json = Some(body);
        self
    }
}

/// The HTTP client for interacting with a Cachet status page API.
///
/// This client handles all HTTP communication with Cachet, including:
/// - Resolving paths against the configured base endpoint
/// - Applying authentication headers
/// - Serializing request bodies and deserializing responses
/// - Converting every failure into a [`ConnectionError`] that carries the
///   originating request and, when received, the response
///
/// # Creating a Client
///
/// ```rust,no_run
/// use cachet_sdk::{Auth, CachetClient};
///
/// // Anonymous client (read endpoints are public on most installations)
/// let client = CachetClient::new("https://status.example.com/api/v1")?;
///
/// // Authenticated client
/// let client = CachetClient::new("https://status.example.com/api/v1")?
///     .with_auth(Auth::token("9yMHsdioQosnyVK4iCVR"));
/// # Ok::<(), cachet_sdk::BuildError>(())
/// ```
///
/// # Cloning
///
/// `CachetClient` is cheap to clone; clones share the underlying connection
/// pool. Each resource-action value owns a clone.
#[derive(Clone)]
pub struct CachetClient {
    /// The underlying HTTP client
    http: Client,
    /// The base API endpoint, e.g. `https://status.example.com/api/v1`
    endpoint: Url,
    /// Optional authentication credentials
    auth: Option<Auth>,
}

impl CachetClient {
    /// Creates a client for the given base endpoint with default settings.
    ///
    /// Equivalent to `CachetClient::builder(endpoint).build()`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the endpoint is not a valid absolute URL or
    /// the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, BuildError> {
        Self::builder(endpoint).build()
    }

    /// Starts building a client for the given base endpoint.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use cachet_sdk::CachetClient;
    ///
    /// let client = CachetClient::builder("https://status.example.com/api/v1")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok::<(), cachet_sdk::BuildError>(())
    /// ```
    pub fn builder(endpoint: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(endpoint)
    }

    /// Sets the authentication credentials for this client.
    ///
    /// This method uses the builder pattern and returns `self` for chaining.
    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the configured base endpoint.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str().trim_end_matches('/')
    }

    /// Resolves a relative API path (plus query parameters) against the
    /// configured endpoint.
    fn build_url(&self, path: &str, query: &[(String, String)]) -> Url {
        let mut url = self.endpoint.clone();
        // path_segments_mut cannot fail: build() rejects cannot-be-a-base endpoints
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Sends one request and returns the raw response snapshot.
    ///
    /// Shared plumbing for the typed wrappers: builds the URL, captures the
    /// request snapshot, applies auth, checks the status, and reads the body.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<(RequestSnapshot, ResponseSnapshot), ConnectionError> {
        let url = self.build_url(path, &options.query);
        let snapshot = RequestSnapshot::new(method.clone(), url.clone(), options.json.clone());

        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }
        if let Some(body) = &options.json {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ConnectionError::transport(snapshot.clone(), e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConnectionError::transport(snapshot.clone(), e))?;

        if !status.is_success() {
            tracing::debug!("{} returned {}", snapshot, status);
            let message = format_api_error(status, &body);
            return Err(ConnectionError::bad_status(
                snapshot,
                ResponseSnapshot::new(status, body),
                message,
            ));
        }

        Ok((snapshot, ResponseSnapshot::new(status, body)))
    }

    /// Issues a request and deserializes the response body.
    ///
    /// This is the transport contract every resource action is built on:
    /// `call(method, path, options)` resolves `path` against the base
    /// endpoint, appends `options.query`, serializes `options.json` as the
    /// body, and parses the response into `T`.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if:
    /// - The network request fails (no response attached)
    /// - The response status is not successful (response attached)
    /// - The response body cannot be deserialized to `T` (response attached)
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cachet_sdk::{CachetClient, Envelope, RequestOptions};
    /// use reqwest::Method;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CachetClient::new("https://status.example.com/api/v1")?;
    /// let pong: Envelope<String> = client
    ///     .call(Method::GET, "ping", RequestOptions::new())
    ///     .await?;
    /// assert_eq!(pong.data, "Pong!");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ConnectionError> {
        let (snapshot, response) = self.dispatch(method, path, options).await?;
        match serde_json::from_str(response.body()) {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConnectionError::decode(snapshot, response, e)),
        }
    }

    /// Makes an HTTP GET request to the specified path.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ConnectionError> {
        self.call(Method::GET, path, options).await
    }

    /// Makes an HTTP POST request to the specified path with a JSON body.
    ///
    /// # Errors
    ///
    /// In addition to the [`call`](Self::call) failure modes, returns a
    /// [`ConnectionError`] (with no response attached) if `body` cannot be
    /// serialized.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ConnectionError> {
        let body = self.encode_body(Method::POST, path, body)?;
        self.call(Method::POST, path, RequestOptions::new().json(body))
            .await
    }

    /// Makes an HTTP PUT request to the specified path with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ConnectionError> {
        let body = self.encode_body(Method::PUT, path, body)?;
        self.call(Method::PUT, path, RequestOptions::new().json(body))
            .await
    }

    /// Makes an HTTP DELETE request to the specified path.
    ///
    /// The response body is ignored; Cachet delete endpoints reply with an
    /// empty 204 on success.
    pub async fn delete(&self, path: &str) -> Result<(), ConnectionError> {
        self.dispatch(Method::DELETE, path, RequestOptions::new())
            .await?;
        Ok(())
    }

    fn encode_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, ConnectionError> {
        serde_json::to_value(body).map_err(|e| {
            let url = self.build_url(path, &[]);
            ConnectionError::encode(RequestSnapshot::new(method, url, None), e)
        })
    }
}

/// Builder for [`CachetClient`].
///
/// Collects the base endpoint, credentials, and transport settings, then
/// validates everything in [`build`](Self::build).
///
/// # Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | `auth` | none (anonymous) |
/// | `user_agent` | `cachet-sdk/<version>` |
/// | `timeout` | transport default (no explicit timeout) |
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    endpoint: String,
    auth: Option<Auth>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Starts a builder for the given base endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the authentication credentials.
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Imposes a request timeout on the transport.
    ///
    /// Without this, no timeout is imposed beyond the transport's defaults;
    /// callers needing cancellation should set one here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the configuration and constructs the client.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidEndpoint`] if the endpoint does not parse
    /// as an absolute URL, [`BuildError::EndpointNotABase`] if it cannot
    /// carry path segments (e.g. `data:` URLs), and [`BuildError::Http`] if
    /// the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<CachetClient, BuildError> {
        let endpoint = Url::parse(self.endpoint.trim_end_matches('/'))?;
        if endpoint.cannot_be_a_base() {
            return Err(BuildError::EndpointNotABase);
        }

        let mut builder = Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| format!("cachet-sdk/{}", crate::VERSION)),
        );
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(CachetClient {
            http: builder.build()?,
            endpoint,
            auth: self.auth,
        })
    }
}
