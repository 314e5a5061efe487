//! UserSource trait and the remote user collection fetch.
//!
//! Decouples the pages from the transport so tests can substitute a
//! canned source for the real HTTP API.

pub mod http;

use std::fmt;

use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::User;

pub use http::HttpUserSource;

/// Errors from fetching the user collection.
///
/// Callers treat every variant as the same "fetch failed" condition;
/// the split only sharpens log messages.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("user API request failed: {0}")]
    Request(String),

    #[error("user API returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode user API response: {0}")]
    Decode(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// How intermediaries may treat the outbound request.
///
/// The crate never stores responses itself; this only controls the
/// cache directives sent upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    /// Require revalidation (`Cache-Control: no-cache`).
    #[default]
    Fresh,
    /// Send no cache directives; a proxy may answer from its cache.
    AllowStale,
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachePolicy::Fresh => write!(f, "fresh"),
            CachePolicy::AllowStale => write!(f, "allow-stale"),
        }
    }
}

impl std::str::FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fresh" | "no-store" | "no-cache" => Ok(CachePolicy::Fresh),
            "allow-stale" | "stale" => Ok(CachePolicy::AllowStale),
            other => Err(format!(
                "unsupported cache policy: '{other}'. Supported: fresh, allow-stale"
            )),
        }
    }
}

/// Per-call fetch options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub cache: CachePolicy,
}

impl FetchOptions {
    pub fn with_cache(cache: CachePolicy) -> Self {
        Self { cache }
    }
}

/// Source of the full user collection.
///
/// Implementations return records in the order the upstream produced
/// them; ordering for display happens later.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user.
    async fn fetch_users(&self, options: FetchOptions) -> Result<Vec<User>, FetchError>;
}
