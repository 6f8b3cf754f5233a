use crate::domain::model::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::domain::ports::ApiClient;
use crate::utils::error::{Result, SmokeError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// `ApiClient` over reqwest. Paths are appended to the base URL verbatim.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// `None` leaves requests unbounded, so a hung server hangs the run.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, request: &RequestSpec) -> String {
        format!("{}{}", self.base_url, request.path)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn fetch(&self, request: &RequestSpec) -> Result<ResponseEnvelope> {
        let url = self.url_for(request);
        tracing::debug!("Making API request: {} {}", request.method, url);

        let builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
        };
        let response = builder.query(&request.query).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            });
            return Err(SmokeError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            tracing::warn!("Empty response body from {}", url);
            return Ok(ResponseEnvelope::default());
        }

        Ok(ResponseEnvelope(serde_json::from_slice(&bytes)?))
    }
}
