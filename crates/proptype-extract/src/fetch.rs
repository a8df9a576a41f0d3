//! Retrieval of the upstream source text.

use std::time::Duration;

use proptype_core::config::ExtractConfig;
use proptype_core::errors::{ExtractError, ExtractResult};
use tracing::info;

/// Something that can produce the source text for a URL.
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> ExtractResult<String>;
}

/// Blocking HTTP GET. A non-2xx status is a failure.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn from_config(config: &ExtractConfig) -> ExtractResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.effective_timeout_secs()))
            .user_agent(config.effective_user_agent())
            .build()
            .map_err(|e| ExtractError::Fetch {
                url: config.effective_source_url().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> ExtractResult<String> {
        let fetch_error = |e: reqwest::Error| ExtractError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let text = response.text().map_err(fetch_error)?;
        info!(url, bytes = text.len(), "fetched source");
        Ok(text)
    }
}

/// Serves fixed text regardless of URL. Used for offline runs and tests.
pub struct StaticFetcher {
    text: String,
}

impl StaticFetcher {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SourceFetcher for StaticFetcher {
    fn fetch(&self, _url: &str) -> ExtractResult<String> {
        Ok(self.text.clone())
    }
}

impl<F: SourceFetcher + ?Sized> SourceFetcher for &F {
    fn fetch(&self, url: &str) -> ExtractResult<String> {
        (**self).fetch(url)
    }
}
