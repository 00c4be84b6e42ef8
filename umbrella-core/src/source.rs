use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Result, UmbrellaError};

/// Something that turns a forecast URL into a parsed JSON tree.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Fetches forecasts over HTTP with a single GET per call.
#[derive(Debug, Clone)]
pub struct HttpForecastSource {
    http: Client,
}

impl HttpForecastSource {
    /// A source without a request timeout: a call waits until the server
    /// answers or the connection fails.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| UmbrellaError::Fetch {
            status: None,
            message: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self { http })
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        info!(url = %redact_key(url), "requesting forecast");

        let res = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, "forecast request failed");
            UmbrellaError::fetch(e.status().map(|s| s.as_u16()))
        })?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read forecast response body");
            UmbrellaError::fetch(Some(status.as_u16()))
        })?;

        if !status.is_success() {
            warn!(
                %status,
                body = %truncate_body(&String::from_utf8_lossy(&body)),
                "forecast request rejected"
            );
            return Err(UmbrellaError::fetch(Some(status.as_u16())));
        }

        debug!(bytes = body.len(), "forecast response received");

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "forecast response is not JSON");
            UmbrellaError::parse()
        })
    }
}

fn redact_key(url: &str) -> String {
    match url.find("APPID=") {
        Some(pos) => format!("{}APPID=***", &url[..pos]),
        None => url.to_string(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
