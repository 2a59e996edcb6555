//! Concordia shuttle map HTTP client.
//!
//! The shuttle site only serves bus positions to callers holding a session
//! cookie from its map page, so every fetch is two requests: load the map
//! page for a cookie, then post to the bus data web service with it.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::{debug, info, warn};

use super::error::ShuttleError;
use super::types::{BusLocations, SessionCookie};

/// Default base URL for the shuttle map site.
pub const DEFAULT_BASE_URL: &str = "https://shuttle.concordia.ca/concordiabusmap";

/// User agent sent on both requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page that hands out the session cookie.
const MAP_PATH: &str = "/Map.aspx";

/// Web service method returning bus positions.
const BUS_DATA_PATH: &str = "/WebService/GService.asmx/GetGoogleObject";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Configuration for the shuttle client.
#[derive(Debug, Clone)]
pub struct ShuttleConfig {
    /// Base URL of the map site (defaults to production)
    pub base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ShuttleConfig {
    /// Create a config pointing at the production shuttle site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent sent on both requests.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    fn map_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), MAP_PATH)
    }

    fn bus_data_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), BUS_DATA_PATH)
    }
}

impl Default for ShuttleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the shuttle bus location service.
///
/// Holds no session state: each [`fetch`](Self::fetch) obtains a fresh
/// cookie and forgets it once the data request completes.
#[derive(Debug, Clone)]
pub struct ShuttleClient {
    http: reqwest::Client,
    map_url: String,
    bus_data_url: String,
}

impl ShuttleClient {
    /// Create a new shuttle client with the given configuration.
    pub fn new(config: ShuttleConfig) -> Result<Self, ShuttleError> {
        if config.user_agent.trim().is_empty() {
            return Err(ShuttleError::InvalidConfig(
                "user agent must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            map_url: config.map_url(),
            bus_data_url: config.bus_data_url(),
        })
    }

    /// Fetch live bus locations.
    ///
    /// Returns `None` on any failure. The cause is logged; use
    /// [`try_fetch`](Self::try_fetch) to inspect it.
    pub async fn fetch(&self) -> Option<BusLocations> {
        match self.try_fetch().await {
            Ok(locations) => Some(locations),
            Err(e) => {
                warn!(error = %e, "error fetching bus data");
                None
            }
        }
    }

    /// Fetch live bus locations, reporting which step failed.
    pub async fn try_fetch(&self) -> Result<BusLocations, ShuttleError> {
        let cookie = self.fetch_session_cookie().await?;
        self.fetch_bus_data(&cookie).await
    }

    /// Load the map page and capture its session cookie.
    pub async fn fetch_session_cookie(&self) -> Result<SessionCookie, ShuttleError> {
        debug!(url = %self.map_url, "fetching session cookies");

        let response = self.http.get(&self.map_url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(ShuttleError::SessionFetch {
                status: status.as_u16(),
            });
        }

        let cookie =
            SessionCookie::from_headers(response.headers()).ok_or(ShuttleError::MissingCookie)?;

        debug!(len = cookie.as_bytes().len(), "session cookies received");
        Ok(cookie)
    }

    /// Request bus positions using a previously captured session cookie.
    pub async fn fetch_bus_data(
        &self,
        cookie: &SessionCookie,
    ) -> Result<BusLocations, ShuttleError> {
        debug!(url = %self.bus_data_url, "fetching bus locations");

        let response = self
            .http
            .post(&self.bus_data_url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(COOKIE, cookie.header_value().clone())
            .body("{}")
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            return Err(ShuttleError::DataFetch {
                status: status.as_u16(),
            });
        }

        // Decode the raw bytes so invalid UTF-8 is a decode error, not U+FFFD.
        let body = response.bytes().await?;

        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| ShuttleError::Decode {
                message: e.to_string(),
                body: Some(String::from_utf8_lossy(&body).chars().take(500).collect()),
            })?;

        info!(bytes = body.len(), "bus data received");
        Ok(BusLocations(value))
    }
}
