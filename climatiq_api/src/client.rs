//! HTTP client for the Climatiq search API.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    errors::TransportError,
    query::{EncodedQuery, Query, SearchQuery},
    types::SearchResponse,
    Error,
};

/// Root of the public Climatiq API.
pub const DEFAULT_BASE_URL: &str = "https://beta4.api.climatiq.io/";

/// User agent sent unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("climatiq-rs/", env!("CARGO_PKG_VERSION"));

/// Request timeout of the default transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const JSON_MEDIA_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client for the Climatiq API.
///
/// Every request carries JSON content negotiation headers and the configured
/// bearer token. The client holds no mutable state, so one instance can
/// serve concurrent searches.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Must end in `/`; paths are appended verbatim.
    base_url: String,
    user_agent: String,
    auth_token: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("auth_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Configuration for a [`Client`]. Unset options fall back to the defaults;
/// setting an option twice keeps the last value.
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    auth_token: Option<String>,
}

impl ClientBuilder {
    /// Overrides the API root. Include the trailing `/`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Replaces the default transport, e.g. to share a connection pool or
    /// change timeouts.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Sets the API key sent as `Authorization: Bearer <token>`.
    pub fn auth_token(mut self, auth_token: &str) -> Self {
        self.auth_token = Some(auth_token.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(Error::Build)?,
        };
        Ok(Client {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            auth_token: self.auth_token.unwrap_or_default(),
        })
    }
}

impl Client {
    /// Creates a client pointing at the public API with no credentials.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client with a custom base URL and token. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, auth_token: &str) -> Result<Self, Error> {
        Self::builder()
            .base_url(base_url)
            .auth_token(auth_token)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn search_url(&self, query: &EncodedQuery) -> String {
        format!("{}search?{}", self.base_url, query)
    }

    async fn get<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(url, "sending request");
        let resp = self
            .http
            .get(url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(AUTHORIZATION, format!("Bearer {}", self.auth_token))
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), "received response");
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = resp.bytes().await.map_err(TransportError::Http)?;
        serde_json::from_slice::<T>(&body).map_err(Error::Decode)
    }

    /// Searches emission factors. Returns the single page selected by the
    /// query's pagination fields.
    ///
    /// Invalid queries fail with [`Error::InvalidRequest`] before anything is
    /// sent. Dropping the returned future aborts the request.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        let encoded = query.encode()?;
        self.get::<SearchResponse>(&self.search_url(&encoded)).await
    }

    /// Like [`Client::search`], but gives up as soon as `cancel` completes,
    /// returning [`TransportError::Cancelled`].
    ///
    /// ```no_run
    /// # async fn example(client: &climatiq_api::Client) {
    /// use std::time::Duration;
    /// use climatiq_api::SearchQuery;
    ///
    /// let query = SearchQuery::new("^5").with_query("aws");
    /// let deadline = tokio::time::sleep(Duration::from_secs(5));
    /// let result = client.search_until(&query, deadline).await;
    /// # }
    /// ```
    pub async fn search_until<F>(
        &self,
        query: &SearchQuery,
        cancel: F,
    ) -> Result<SearchResponse, Error>
    where
        F: Future<Output = ()>,
    {
        let encoded = query.encode()?;
        let url = self.search_url(&encoded);
        tokio::select! {
            biased;
            _ = cancel => {
                tracing::debug!("search cancelled by caller");
                Err(TransportError::Cancelled.into())
            }
            result = self.get::<SearchResponse>(&url) => result,
        }
    }
}
