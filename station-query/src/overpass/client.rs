//! Overpass API HTTP client.

use std::time::Duration;

use tracing::{debug, warn};

use super::error::OverpassError;
use super::types::OverpassResponse;

/// Default Overpass interpreter endpoint.
pub const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Station nodes for Line 6 Finch West.
///
/// OSM does not tag which line a station belongs to, so the line is picked
/// out by its opening date plus the Finch West interchange. `out skel qt`
/// after the recurse step returns bare nodes with no tags.
pub const LINE6_STATIONS_QUERY: &str = r#"
    [out:json];
    area[name="Toronto"]->.searchArea;
    (
    node["railway"="station"]["network"="TTC"]["start_date"="2025-12-07"](area.searchArea);
    node["railway"="station"]["network"="TTC"]["name"="Finch West"](area.searchArea);
    );
    out body;
    >;
    out skel qt;
    "#;

/// Configuration for the Overpass client.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Interpreter endpoint
    pub base_url: String,
    /// Overpass QL sent as the `data` form field
    pub query: String,
    /// Request timeout; `None` leaves reqwest's default in place
    pub timeout: Option<Duration>,
}

impl OverpassConfig {
    /// Set a custom endpoint (mirror or test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: LINE6_STATIONS_QUERY.to_string(),
            timeout: None,
        }
    }
}

/// Client for the Overpass interpreter.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    base_url: String,
    query: String,
}

impl OverpassClient {
    /// Create a new Overpass client.
    pub fn new(config: OverpassConfig) -> Result<Self, OverpassError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            query: config.query,
        })
    }

    /// Run the configured query and parse the response.
    ///
    /// Any transport failure or non-2xx status is returned as an error;
    /// there is no retry.
    pub async fn fetch(&self) -> Result<OverpassResponse, OverpassError> {
        debug!(url = %self.base_url, "posting Overpass query");

        let response = self
            .http
            .post(&self.base_url)
            .form(&[("data", self.query.as_str())])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OverpassError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received Overpass response");

        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if let Some(remark) = &parsed.remark {
            warn!(%remark, "Overpass reported a problem; results may be incomplete");
        }
        debug!(elements = parsed.elements.len(), "parsed Overpass response");

        Ok(parsed)
    }
}
