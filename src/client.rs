//! Core HTTP client for the OptLab research REST API.
//!
//! The [`OptLabClient`] struct is the main entry point for interacting with
//! the OptLab backend. It wraps [`reqwest::Client`] with the API key header
//! and provides typed `get` and `post` methods.
//!
//! API endpoint methods are added to `OptLabClient` via `impl` blocks in the
//! [`crate::api`] module.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::API_BASE_URL;
use crate::error::{ApiErrorBody, OptLabError, Result};

/// Core HTTP client for the OptLab research REST API.
///
/// Wraps [`reqwest::Client`] and injects the API key header into every
/// request. The header value is cached at construction time to avoid
/// per-request allocation.
///
/// # Example
///
/// ```no_run
/// use optlab_rs::client::OptLabClient;
///
/// # #[tokio::main]
/// # async fn main() -> optlab_rs::error::Result<()> {
/// let client = OptLabClient::new("your-api-key")?;
/// let quote = client.get_spot_quote("SPY").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OptLabClient {
    http: reqwest::Client,
    /// API key used to authenticate every request.
    api_key: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    /// Pre-built auth header value, cached to avoid per-request allocation.
    auth_header: HeaderValue,
}

impl OptLabClient {
    /// Create a new `OptLabClient` with the given API key.
    ///
    /// Uses the default API base URL (`https://api.optlab.io`).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a new `OptLabClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a sandbox or mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        let api_key = api_key.into();
        let auth_header = HeaderValue::from_str(&api_key)
            .map_err(|_| OptLabError::InvalidArgument("api key contains invalid header characters".into()))?;

        // Reject unparseable base URLs at construction time.
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request auth headers. Uses the cached [`HeaderValue`] — only the
    /// [`HeaderMap`] container is allocated per call (no string parsing).
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("x-api-key", self.auth_header.clone());
        headers
    }

    /// Read a response, returning either the deserialized body or an
    /// `OptLabError`.
    ///
    /// Uses `bytes()` + `serde_json::from_slice()` to avoid the overhead of
    /// UTF-8 validation that `text()` + `from_str()` would incur.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(OptLabError::Json)
        } else {
            // Error path: parse as string for the error body
            let body = String::from_utf8_lossy(&bytes);
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Try to parse the API's JSON error structure; fall back to a raw HTTP
    /// status error.
    pub(crate) fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> OptLabError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.error_code.is_some() || api_err.error_message.is_some() {
                return OptLabError::Api(api_err);
            }
        }
        OptLabError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}
