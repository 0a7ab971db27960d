//! HTTP client for the hosted data store.
//!
//! The store exposes each table under `{base_url}/rest/v1/{table}` and takes
//! filters, projections, and ordering as query parameters. A single
//! [`DataClient`] is built from configuration at startup and handed to every
//! repository that needs it; there is no process-wide instance.

mod query;

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{IntoCore, StorageError};
use fundboard_core::errors::Result;

pub use query::{InsertQuery, Order, TableQuery};

/// Default timeout for store requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path prefix of the store's table endpoints.
const REST_PATH: &str = "/rest/v1";

/// Media type asking the store to shape the result as one object instead of an array.
const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// Connection settings for [`DataClient`].
#[derive(Debug, Clone)]
pub struct DataClientConfig {
    /// Base URL of the hosted service, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Project API key, sent both as `apikey` and as the bearer token.
    pub api_key: String,
    pub timeout: Duration,
}

impl DataClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Handle to the hosted data store.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// let client = DataClient::new(&DataClientConfig::new(url, key))?;
/// let rows: Vec<ContributionDB> = client
///     .table("contributions")
///     .eq("member_id", "m1")
///     .order("created_at", Order::Descending)
///     .fetch_all()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct DataClient {
    http: reqwest::Client,
    rest_url: String,
    headers: HeaderMap,
}

impl DataClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be used as a header value or the
    /// HTTP client cannot be initialized.
    pub fn new(config: &DataClientConfig) -> Result<Self> {
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| StorageError::ClientSetup(format!("Invalid API key format: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| StorageError::ClientSetup(format!("Invalid API key format: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                StorageError::ClientSetup(format!("Failed to initialize HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            rest_url: format!("{}{}", config.base_url.trim_end_matches('/'), REST_PATH),
            headers,
        })
    }

    /// Starts a query against `table`.
    pub fn table(&self, table: &str) -> TableQuery<'_> {
        TableQuery::new(self, table)
    }

    /// Root of the table endpoints, without trailing slash.
    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn request(
        &self,
        method: reqwest::Method,
        table: &str,
        single: bool,
    ) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.endpoint(table))
            .headers(self.headers.clone());
        if single {
            builder = builder.header(ACCEPT, SINGLE_OBJECT_MEDIA_TYPE);
        }
        builder
    }

    /// Send a request and parse the response body as `T`.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await.into_core()?;
        self.parse_response(response).await
    }

    /// Parse a store response, turning error statuses into `StorageError::Rejected`.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await.into_core()?;

        if !status.is_success() {
            let rejected = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) => StorageError::Rejected {
                    status: status.as_u16(),
                    code: err.code,
                    message: err
                        .message
                        .or(err.details)
                        .unwrap_or_else(|| format!("HTTP {}", status)),
                },
                Err(_) => StorageError::Rejected {
                    status: status.as_u16(),
                    code: None,
                    message: body.chars().take(200).collect(),
                },
            };
            debug!("[DataClient] {}", rejected);
            return Err(rejected.into());
        }

        serde_json::from_str::<T>(&body).into_core()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DataClient::new(&DataClientConfig::new("https://abc.example.co", "anon"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_rest_url_normalization() {
        let client =
            DataClient::new(&DataClientConfig::new("https://abc.example.co/", "anon")).unwrap();
        assert_eq!(client.rest_url(), "https://abc.example.co/rest/v1");
        assert_eq!(
            client.endpoint("contributions"),
            "https://abc.example.co/rest/v1/contributions"
        );
    }

    #[test]
    fn test_api_key_with_newline_is_rejected() {
        let result = DataClient::new(&DataClientConfig::new("https://abc.example.co", "bad\nkey"));
        assert!(matches!(
            result,
            Err(fundboard_core::Error::InvalidConfigValue(_))
        ));
    }
}
