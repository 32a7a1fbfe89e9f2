//! XkcdClient - handles communication with the xkcd JSON API.

use std::time::Duration;

use serde::Deserialize;

use crate::config::{XkcdConfig, XKCD_BASE_URL};

/// HTTP status code for a comic that does not exist.
const HTTP_STATUS_NOT_FOUND: u16 = 404;

/// Metadata for one comic, as served by `info.0.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Comic {
    /// Comic number.
    pub num: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub safe_title: String,
    /// Absolute URL of the comic image.
    pub img: String,
    /// Hover text.
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
}

/// Source of comic metadata.
///
/// Implemented by [`XkcdClient`]; the resolver only depends on this trait.
#[allow(async_fn_in_trait)]
pub trait ComicApi {
    /// Fetch the most recent comic.
    async fn fetch_latest(&self) -> Result<Comic, XkcdError>;

    /// Fetch a comic by its number.
    async fn fetch_by_id(&self, id: i64) -> Result<Comic, XkcdError>;
}

/// Client for the xkcd JSON API.
#[derive(Debug, Clone)]
pub struct XkcdClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl XkcdClient {
    /// Create a client for the public xkcd API.
    pub fn new() -> Result<Self, XkcdError> {
        Self::with_base_url(XKCD_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: String) -> Result<Self, XkcdError> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(base_url, http_client))
    }

    /// Create a client from the `[xkcd]` config section.
    pub fn from_config(config: &XkcdConfig) -> Result<Self, XkcdError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_http_client(config.base_url.clone(), builder.build()?))
    }

    /// Create a client that shares an existing HTTP connection pool.
    pub fn with_http_client(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// URL of the metadata document for a comic, or the latest one.
    pub fn info_url(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/{}/info.0.json", self.base_url, id),
            None => format!("{}/info.0.json", self.base_url),
        }
    }

    async fn fetch(&self, id: Option<i64>) -> Result<Comic, XkcdError> {
        let url = self.info_url(id);
        log::debug!("Requesting {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if status.as_u16() == HTTP_STATUS_NOT_FOUND {
            return Err(XkcdError::NotFound { id });
        }
        if !status.is_success() {
            return Err(XkcdError::Status {
                status: status.as_u16(),
            });
        }

        let comic: Comic = response.json().await.map_err(|e| {
            if e.is_decode() {
                XkcdError::Decode(e.to_string())
            } else {
                XkcdError::Http(e)
            }
        })?;

        log::info!("Fetched xkcd #{}: {}", comic.num, comic.title);
        Ok(comic)
    }
}

impl ComicApi for XkcdClient {
    async fn fetch_latest(&self) -> Result<Comic, XkcdError> {
        self.fetch(None).await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Comic, XkcdError> {
        self.fetch(Some(id)).await
    }
}

/// Errors that can occur while talking to the xkcd API.
#[derive(Debug, thiserror::Error)]
pub enum XkcdError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", not_found_message(.id))]
    NotFound {
        /// Requested comic, `None` for the latest
        id: Option<i64>,
    },

    #[error("API returned status {status}")]
    Status { status: u16 },

    #[error("invalid comic metadata: {0}")]
    Decode(String),
}

fn not_found_message(id: &Option<i64>) -> String {
    match id {
        Some(id) => format!("comic {} not found", id),
        None => "comic not found".to_string(),
    }
}
