use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;

use super::JsonSource;

pub const DEFAULT_API_BASE: &str = "https://uhunt.onlinejudge.org/api";

/// Blocking HTTP transport for the uHunt API.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let headers = HeaderMap::from_iter([
            (header::ACCEPT, HeaderValue::from_static("application/json")),
        ]);

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Couldn't create the HTTP client.")?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn get_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl JsonSource for HttpSource {
    fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.get_url(path);
        log::debug!("[get_json] GET {}", url);

        Ok(self.client
            .get(&url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()?
            .json::<Value>()
            .with_context(|| format!("Response from {} was not valid JSON", url))?)
    }
}
