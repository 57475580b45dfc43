//! Public IP lookup over HTTP.
//!
//! Talks to an ipify-compatible endpoint returning `{"ip": "..."}`.

use std::time::Duration;

use async_trait::async_trait;
use nubo_core::config::SessionSettings;
use nubo_core::session::{IpLookup, IpLookupError};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// HTTP-backed [`IpLookup`].
#[derive(Clone)]
pub struct HttpIpLookup {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpIpLookup {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(settings.ip_lookup_url.clone(), settings.ip_lookup_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpIpLookup {
    fn default() -> Self {
        Self::from_settings(&SessionSettings::default())
    }
}

impl std::fmt::Debug for HttpIpLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpIpLookup")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl IpLookup for HttpIpLookup {
    async fn lookup(&self) -> Result<String, IpLookupError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    IpLookupError::Timeout(self.timeout.as_millis())
                } else {
                    IpLookupError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IpLookupError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IpLookupError::Request(e.to_string()))?;
        parse_ip_body(&body)
    }
}

/// Extracts the address from an ipify JSON body.
fn parse_ip_body(body: &str) -> Result<String, IpLookupError> {
    let parsed: IpResponse = serde_json::from_str(body)
        .map_err(|e| IpLookupError::InvalidResponse(e.to_string()))?;
    let ip = parsed.ip.trim();
    if ip.is_empty() {
        return Err(IpLookupError::InvalidResponse("empty ip".to_string()));
    }
    Ok(ip.to_string())
}
