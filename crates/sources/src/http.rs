//! HTTP corpus source: fetches the corpus from a URL with `reqwest`.

use async_trait::async_trait;
use mailweave_core::error::SourceError;
use mailweave_core::source::CorpusSource;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches corpus text with a plain GET.
///
/// The client carries its own timeout; the orchestrator applies another
/// one around the whole fetch.
pub struct HttpSource {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let url = url.into();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SourceError::InvalidLocator(format!(
                "URL must start with http:// or https://: {url}"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mailweave/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            url,
            timeout,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout {
                locator: self.url.clone(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            SourceError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl CorpusSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn locator(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Corpus request rejected");
            return Err(SourceError::Status {
                url: self.url.clone(),
                status_code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.map_error(e))?;
        let text = String::from_utf8(bytes.to_vec()).map_err(|e| {
            SourceError::Http(format!("Corpus at {} is not valid UTF-8: {e}", self.url))
        })?;
        debug!(url = %self.url, bytes = text.len(), "Corpus fetched");
        Ok(text)
    }
}
