use std::time::Duration;

use reqwest::Client;

use crate::core::Fetcher;
use crate::utils::error::{RecipeError, Result};

/// Plain GET requests, no headers or authentication.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// A client without a request timeout.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// `None` keeps the client without a timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let network_error = |e: reqwest::Error| RecipeError::NetworkError {
            url: url.to_string(),
            message: if e.is_timeout() {
                format!("request timed out: {}", e)
            } else {
                e.to_string()
            },
        };

        let response = self.client.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        tracing::debug!("Response from {}: {}", url, status);
        if !status.is_success() {
            return Err(RecipeError::NetworkError {
                url: url.to_string(),
                message: format!("HTTP status {}", status),
            });
        }

        let body = response.bytes().await.map_err(network_error)?;
        Ok(body.to_vec())
    }
}
