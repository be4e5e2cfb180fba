//! Hacker News API client.
//!
//! This module wraps the two read-only operations the application needs
//! from the [Hacker News API](https://github.com/HackerNews/API):
//!
//! 1. **Story list**: `GET <base>/<category>stories.json` returning the
//!    ordered ids for a feed ([`Category`])
//! 2. **Item fetch**: `GET <base>/item/<id>.json` returning one [`Item`]
//!
//! # Architecture
//!
//! The operations live behind the [`StorySource`] trait so the search
//! pipeline can be exercised against an in-memory fake in tests.
//! [`HnClient`] is the real implementation over `reqwest`, configured by an
//! explicit [`HnConfig`] rather than global state.
//!
//! Transport failures (including timeouts and non-2xx statuses) and decode
//! failures are reported as distinct error variants; there are no retries.

use crate::error::{Error, Result};
use crate::models::{Item, StoryId};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Base URL of the public Hacker News API. The trailing slash matters for
/// joining feed and item paths onto it.
const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Default bound on any single request. The minimal contract has no
/// timeout, but an unbounded wait would hang the whole batch on one stuck
/// connection.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Which story feed to resolve ids from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The newest stories. The default feed.
    New,
    /// The current front-page ranking.
    Top,
    /// The best recent stories.
    Best,
}

impl Category {
    /// The feed's path relative to the API base.
    pub fn feed_path(self) -> &'static str {
        match self {
            Category::New => "newstories.json",
            Category::Top => "topstories.json",
            Category::Best => "beststories.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::New => "new",
            Category::Top => "top",
            Category::Best => "best",
        };
        f.write_str(name)
    }
}

/// Configuration for [`HnClient`], passed explicitly at construction time.
#[derive(Debug, Clone)]
pub struct HnConfig {
    /// API base URL. Must end with a slash so relative paths join onto it.
    pub base_url: Url,
    /// Bound on each individual request, list and item alike.
    pub request_timeout: Duration,
}

impl Default for HnConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Async source of story ids and items.
///
/// [`HnClient`] implements this over the network; tests implement it over
/// an in-memory map. Implementations must be shareable across the spawned
/// fetch tasks, hence the `Send + Sync` bound.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Resolve the ordered story ids for a feed. Failure here is fatal to
    /// the run.
    async fn story_ids(&self, category: Category) -> Result<Vec<StoryId>>;

    /// Fetch one item by id. A single attempt, no retries.
    async fn item(&self, id: StoryId) -> Result<Item>;
}

/// HTTP client for the Hacker News API.
#[derive(Debug, Clone)]
pub struct HnClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HnClient {
    /// Build a client from the given configuration.
    pub fn new(config: HnConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("hngrep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl StorySource for HnClient {
    #[instrument(level = "info", skip(self))]
    async fn story_ids(&self, category: Category) -> Result<Vec<StoryId>> {
        let resolution = |detail: String| Error::Resolution {
            feed: category,
            detail,
        };

        let url = self
            .base_url
            .join(category.feed_path())
            .map_err(|e| resolution(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| resolution(e.to_string()))?;

        let ids = response
            .json::<Vec<StoryId>>()
            .await
            .map_err(|e| resolution(e.to_string()))?;

        info!(count = ids.len(), %category, "Resolved story ids");
        Ok(ids)
    }

    async fn item(&self, id: StoryId) -> Result<Item> {
        let transport = |detail: String| Error::Transport { id, detail };

        let url = self
            .base_url
            .join(&format!("item/{id}.json"))
            .map_err(|e| transport(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| transport(e.to_string()))?;

        // `null` for unknown ids fails here, as does any truncated payload.
        let item = serde_json::from_str::<Item>(&body).map_err(|e| Error::Decode {
            id,
            detail: e.to_string(),
        })?;

        debug!(id, title = %item.title, "Fetched item");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_paths() {
        assert_eq!(Category::New.feed_path(), "newstories.json");
        assert_eq!(Category::Top.feed_path(), "topstories.json");
        assert_eq!(Category::Best.feed_path(), "beststories.json");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::New.to_string(), "new");
        assert_eq!(Category::Top.to_string(), "top");
        assert_eq!(Category::Best.to_string(), "best");
    }

    #[test]
    fn test_default_config_joins_cleanly() {
        let config = HnConfig::default();
        let feed = config.base_url.join(Category::Top.feed_path()).unwrap();
        assert_eq!(
            feed.as_str(),
            "https://hacker-news.firebaseio.com/v0/topstories.json"
        );
        let item = config.base_url.join("item/8863.json").unwrap();
        assert_eq!(
            item.as_str(),
            "https://hacker-news.firebaseio.com/v0/item/8863.json"
        );
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(HnClient::new(HnConfig::default()).is_ok());
    }
}
