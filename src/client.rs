//! Remote activity source.
//!
//! The core only needs `ActivitySource`; `StravaClient` is the HTTP
//! implementation used by the `sync` command.

use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://www.strava.com/api/v3";
const USER_AGENT: &str = concat!("rclubledger/", env!("CARGO_PKG_VERSION"));
const MAX_PER_PAGE: usize = 200;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Remote source errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub trait ActivitySource {
    /// Up to `limit` raw activity payloads of a club, most recent first.
    fn fetch_raw_activities(&self, group_id: u64, limit: usize) -> Result<Vec<Value>, FetchError>;
}

pub struct StravaClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    pub fn new(base_url: &str, access_token: &str) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    fn fetch_page(&self, club_id: u64, page: usize, per_page: usize) -> Result<Vec<Value>, FetchError> {
        let url = format!("{}/clubs/{}/activities", self.base_url, club_id);

        tracing::debug!("GET {url} page={page} per_page={per_page}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Api(status.as_u16(), body));
        }

        match response.json::<Value>() {
            Ok(Value::Array(items)) => Ok(items),
            Ok(_) => Err(FetchError::Parse("expected a JSON array".to_string())),
            Err(e) => Err(FetchError::Parse(e.to_string())),
        }
    }
}

impl ActivitySource for StravaClient {
    fn fetch_raw_activities(&self, group_id: u64, limit: usize) -> Result<Vec<Value>, FetchError> {
        // per_page fisso: Strava calcola l'offset come (page - 1) * per_page
        let per_page = limit.clamp(1, MAX_PER_PAGE);
        let mut out: Vec<Value> = Vec::new();
        let mut page = 1;

        while out.len() < limit {
            let items = self.fetch_page(group_id, page, per_page)?;
            let short_page = items.len() < per_page;

            out.extend(items);

            if short_page {
                break;
            }
            page += 1;
        }

        out.truncate(limit);
        Ok(out)
    }
}

/// Source used when the HTTP client cannot be built: every fetch fails with
/// the construction error, which the pipeline turns into an empty batch.
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ActivitySource for UnavailableSource {
    fn fetch_raw_activities(&self, _: u64, _: usize) -> Result<Vec<Value>, FetchError> {
        Err(FetchError::Network(self.reason.clone()))
    }
}

/// HTTP source for `base_url`, or an `UnavailableSource` if the client
/// cannot be set up.
pub fn connect(base_url: &str, access_token: &str) -> Box<dyn ActivitySource> {
    match StravaClient::new(base_url, access_token) {
        Ok(client) => Box::new(client),
        Err(e) => Box::new(UnavailableSource::new(e.to_string())),
    }
}
