//! Signup ping over blocking reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use url::Url;

use crate::domain::AppError;
use crate::ports::{PingClient, PingResponse};

/// Single uncached GET per ping; redirects are followed, nothing else is retried.
#[derive(Debug, Clone)]
pub struct HttpPingClient {
    client: Client,
}

impl HttpPingClient {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::HttpError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;
        Ok(Self { client })
    }
}

impl PingClient for HttpPingClient {
    fn get(&self, url: &Url) -> Result<PingResponse, AppError> {
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(|e| AppError::HttpError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| AppError::HttpError {
            message: format!("Failed to read response body: {}", e),
            status: Some(status),
        })?;

        Ok(PingResponse { status, body })
    }
}
