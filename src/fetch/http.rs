//! HTTP-backed user source using `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;

use super::{CachePolicy, FetchError, FetchOptions, UserSource};
use crate::config::SourceConfig;
use crate::constants::USER_AGENT;
use crate::models::User;

/// Fetches the user collection with a single GET to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    /// Create a source for `url`. Without a timeout a hanging upstream
    /// blocks the request indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Build from the `[source]` config section.
    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        Self::new(
            config.users_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// The endpoint this source queries.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self, options: FetchOptions) -> Result<Vec<User>, FetchError> {
        let mut request = self.client.get(&self.url);
        if options.cache == CachePolicy::Fresh {
            request = request
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache");
        }

        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("{}: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Request(format!("{}: {e}", self.url)))?;
        let users: Vec<User> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(url = %self.url, cache = %options.cache, count = users.len(), "fetched users");
        Ok(users)
    }
}
