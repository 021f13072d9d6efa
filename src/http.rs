//! HTTP transport with retry mechanics.
//!
//! This module carries the bytes; it knows nothing about envelopes or
//! options. Responses are returned as raw bodies regardless of HTTP status,
//! because the platform reports request-level failures inside the JSON
//! envelope of 4xx responses. Retries cover transient transport failures
//! and server errors, with exponential backoff and jitter.

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::multipart::MultipartBody;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Transport operations the API wrappers depend on.
///
/// Abstracted behind a trait so tests can exercise the full request path
/// against a recorded double instead of the network.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a GET request and returns the raw response body.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;

    /// Sends a form-encoded POST request and returns the raw response body.
    async fn post_form(&self, url: &str, fields: &[(&'static str, String)]) -> Result<Vec<u8>>;

    /// Sends a multipart POST request and returns the raw response body.
    async fn post_multipart(&self, url: &str, body: &MultipartBody) -> Result<Vec<u8>>;

    /// Downloads content from a URL with a size limit.
    async fn download_with_limit(&self, url: &str, max_size: u64) -> Result<Vec<u8>>;
}

/// HTTP client wrapper for Bot API calls with automatic retry.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Config,
}

impl HttpClient {
    /// Creates a new HTTP client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.http.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Executes a request with retry on transient failures.
    async fn execute_with_retry<F, Fut>(&self, mut operation: F) -> Result<Response>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<Response, reqwest::Error>>,
    {
        let max_attempts = self.config.retry.max_attempts;

        for attempt in 1..=max_attempts {
            match operation().await {
                Ok(response) => {
                    let status = response.status();
                    // 4xx bodies carry the API error envelope and are
                    // returned to the caller as-is; only server errors are
                    // worth another attempt.
                    if !status.is_server_error() || attempt >= max_attempts {
                        return Ok(response);
                    }

                    let delay = self.retry_delay(attempt);
                    warn!(
                        "Server error {status} (attempt {attempt}/{max_attempts}), retrying in {delay:?}"
                    );
                    sleep(delay).await;
                }
                Err(e) => {
                    let error = wrap_transport_error(e);
                    if attempt >= max_attempts || !error.is_retryable() {
                        return Err(error);
                    }

                    let delay = self.retry_delay(attempt);
                    warn!(
                        "Request failed: {error} (attempt {attempt}/{max_attempts}), retrying in {delay:?}"
                    );
                    sleep(delay).await;
                }
            }
        }

        Err(BotError::config_error("max_attempts must be greater than 0"))
    }

    /// Exponential backoff with optional jitter, capped at the configured
    /// maximum delay.
    fn retry_delay(&self, attempt: u32) -> Duration {
        let base = self.config.retry_base_delay();
        let factor = self.config.retry.backoff_factor.powi(attempt as i32 - 1);
        let mut delay = Duration::from_millis((base.as_millis() as f64 * factor) as u64);

        if delay > self.config.retry_max_delay() {
            delay = self.config.retry_max_delay();
        }

        if self.config.retry.enable_jitter {
            let jitter = fastrand::u64(0..=delay.as_millis() as u64 / 4);
            delay += Duration::from_millis(jitter);
        }

        delay
    }

    async fn read_body(response: Response) -> Result<Vec<u8>> {
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Maps a reqwest error to the client's error type, pulling timeouts out
/// into their own variant.
fn wrap_transport_error(error: reqwest::Error) -> BotError {
    if error.is_timeout() {
        BotError::Timeout
    } else {
        BotError::Network(error)
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .execute_with_retry(|| self.client.get(url).send())
            .await?;
        Self::read_body(response).await
    }

    async fn post_form(&self, url: &str, fields: &[(&'static str, String)]) -> Result<Vec<u8>> {
        let response = self
            .execute_with_retry(|| self.client.post(url).form(fields).send())
            .await?;
        Self::read_body(response).await
    }

    async fn post_multipart(&self, url: &str, body: &MultipartBody) -> Result<Vec<u8>> {
        let upload_size = body.upload_size();
        if upload_size > self.config.limits.max_upload_size {
            return Err(BotError::invalid_argument(format!(
                "upload of {upload_size} bytes exceeds the {} byte limit",
                self.config.limits.max_upload_size
            )));
        }

        // The form is rebuilt from the owned body on every attempt because
        // reqwest consumes it per request.
        let response = self
            .execute_with_retry(|| self.client.post(url).multipart(body.to_form()).send())
            .await?;
        Self::read_body(response).await
    }

    async fn download_with_limit(&self, url: &str, max_size: u64) -> Result<Vec<u8>> {
        use futures::StreamExt;

        let effective_max_size = max_size.min(self.config.limits.max_download_size);
        let response = self
            .execute_with_retry(|| self.client.get(url).send())
            .await?;

        if let Some(content_length) = response.content_length() {
            if content_length > effective_max_size {
                return Err(BotError::invalid_argument(format!(
                    "content too large: {content_length} bytes (max: {effective_max_size} bytes)"
                )));
            }
        }

        let mut downloaded_size = 0u64;
        let mut data = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            downloaded_size += chunk.len() as u64;

            if downloaded_size > effective_max_size {
                return Err(BotError::invalid_argument(format!(
                    "content too large during download: {downloaded_size} bytes (max: {effective_max_size} bytes)"
                )));
            }

            data.extend_from_slice(&chunk);
        }

        debug!("Downloaded {downloaded_size} bytes from {url}");
        Ok(data)
    }
}
