//! Configuration management for the Telegram Bot API client.
//!
//! This module provides a centralized configuration system that enables:
//! - Type-safe configuration management
//! - Environment variable integration
//! - Builder pattern for easy setup
//! - Configuration validation
//!
//! ## Usage
//!
//! ```rust
//! use telegram_bot_rs::config::{Config, HttpConfig, RetryConfig};
//! use telegram_bot_rs::Result;
//!
//! fn example() -> Result<()> {
//!     // Create default configuration
//!     let config = Config::default();
//!
//!     // Build custom configuration
//!     let config = Config::builder()
//!         .http(HttpConfig::builder()
//!             .request_timeout_secs(60)
//!             .build())
//!         .retry(RetryConfig::builder()
//!             .max_attempts(5)
//!             .build())
//!         .build();
//!
//!     // Load from environment variables
//!     let config = Config::from_env()?;
//!     Ok(())
//! }
//! ```

use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for the bot client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Retry configuration
    pub retry: RetryConfig,
    /// Upload/download size limits
    pub limits: LimitsConfig,
}

/// HTTP client configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 30)
    pub request_timeout_secs: u64,
    /// Connection timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
    /// Base URL for the Bot API (default: "https://api.telegram.org")
    pub base_url: String,
    /// User agent string for requests
    pub user_agent: String,
}

/// Retry configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (default: 3)
    pub max_attempts: u32,
    /// Base delay between retries in milliseconds (default: 500)
    pub base_delay_ms: u64,
    /// Maximum delay between retries in seconds (default: 30)
    pub max_delay_secs: u64,
    /// Exponential backoff factor (default: 2.0)
    pub backoff_factor: f64,
    /// Whether to add jitter to retry delays (default: true)
    pub enable_jitter: bool,
}

/// Size limits for file transfers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum allowed file size for uploads in bytes (default: 50MB)
    pub max_upload_size: u64,
    /// Maximum allowed file size for downloads in bytes (default: 20MB)
    pub max_download_size: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            base_url: "https://api.telegram.org".to_string(),
            user_agent: format!("telegram-bot-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            max_delay_secs: 30,
            backoff_factor: 2.0,
            enable_jitter: true,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            // Bots may upload files up to 50MB and download files up to 20MB
            max_upload_size: 50 * 1024 * 1024,
            max_download_size: 20 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TGBOT_BASE_URL") {
            config.http.base_url = val;
        }

        if let Ok(val) = std::env::var("TGBOT_REQUEST_TIMEOUT") {
            config.http.request_timeout_secs = val
                .parse()
                .map_err(|_| BotError::config_error("Invalid TGBOT_REQUEST_TIMEOUT value"))?;
        }

        if let Ok(val) = std::env::var("TGBOT_MAX_RETRIES") {
            config.retry.max_attempts = val
                .parse()
                .map_err(|_| BotError::config_error("Invalid TGBOT_MAX_RETRIES value"))?;
        }

        if let Ok(val) = std::env::var("TGBOT_MAX_UPLOAD_SIZE") {
            config.limits.max_upload_size = val
                .parse()
                .map_err(|_| BotError::config_error("Invalid TGBOT_MAX_UPLOAD_SIZE value"))?;
        }

        if let Ok(val) = std::env::var("TGBOT_MAX_DOWNLOAD_SIZE") {
            config.limits.max_download_size = val
                .parse()
                .map_err(|_| BotError::config_error("Invalid TGBOT_MAX_DOWNLOAD_SIZE value"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for consistency and constraints.
    pub fn validate(&self) -> Result<()> {
        if self.http.request_timeout_secs == 0 {
            return Err(BotError::config_error(
                "request_timeout_secs must be greater than 0",
            ));
        }

        if self.http.connect_timeout_secs == 0 {
            return Err(BotError::config_error(
                "connect_timeout_secs must be greater than 0",
            ));
        }

        if self.http.base_url.is_empty() {
            return Err(BotError::config_error("base_url cannot be empty"));
        }

        if self.retry.max_attempts == 0 {
            return Err(BotError::config_error(
                "max_attempts must be greater than 0",
            ));
        }

        if self.retry.backoff_factor < 1.0 {
            return Err(BotError::config_error("backoff_factor must be >= 1.0"));
        }

        if self.limits.max_upload_size == 0 {
            return Err(BotError::config_error(
                "max_upload_size must be greater than 0",
            ));
        }

        if self.limits.max_download_size == 0 {
            return Err(BotError::config_error(
                "max_download_size must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Converts retry config to Duration types for easier use.
    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry.base_delay_ms)
    }

    /// Converts retry config to Duration types for easier use.
    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_secs(self.retry.max_delay_secs)
    }

    /// Converts HTTP timeout to Duration types for easier use.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_secs)
    }

    /// Converts HTTP timeout to Duration types for easier use.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http.connect_timeout_secs)
    }
}

/// Builder for creating Config instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    http: Option<HttpConfig>,
    retry: Option<RetryConfig>,
    limits: Option<LimitsConfig>,
}

impl ConfigBuilder {
    /// Sets the HTTP configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the retry configuration.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Sets the size limits.
    pub fn limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            http: self.http.unwrap_or_default(),
            retry: self.retry.unwrap_or_default(),
            limits: self.limits.unwrap_or_default(),
        }
    }
}

impl HttpConfig {
    /// Creates a new HTTP config builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

impl RetryConfig {
    /// Creates a new retry config builder.
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }
}

impl LimitsConfig {
    /// Creates a new limits config builder.
    pub fn builder() -> LimitsConfigBuilder {
        LimitsConfigBuilder::default()
    }
}

/// Builder for HttpConfig.
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    request_timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.request_timeout_secs = Some(timeout);
        self
    }

    pub fn connect_timeout_secs(mut self, timeout: u64) -> Self {
        self.connect_timeout_secs = Some(timeout);
        self
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn user_agent(mut self, agent: String) -> Self {
        self.user_agent = Some(agent);
        self
    }

    pub fn build(self) -> HttpConfig {
        let default = HttpConfig::default();
        HttpConfig {
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(default.request_timeout_secs),
            connect_timeout_secs: self
                .connect_timeout_secs
                .unwrap_or(default.connect_timeout_secs),
            base_url: self.base_url.unwrap_or(default.base_url),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}

/// Builder for RetryConfig.
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    max_attempts: Option<u32>,
    base_delay_ms: Option<u64>,
    max_delay_secs: Option<u64>,
    backoff_factor: Option<f64>,
    enable_jitter: Option<bool>,
}

impl RetryConfigBuilder {
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn base_delay_ms(mut self, delay: u64) -> Self {
        self.base_delay_ms = Some(delay);
        self
    }

    pub fn max_delay_secs(mut self, delay: u64) -> Self {
        self.max_delay_secs = Some(delay);
        self
    }

    pub fn backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = Some(factor);
        self
    }

    pub fn enable_jitter(mut self, enable: bool) -> Self {
        self.enable_jitter = Some(enable);
        self
    }

    pub fn build(self) -> RetryConfig {
        let default = RetryConfig::default();
        RetryConfig {
            max_attempts: self.max_attempts.unwrap_or(default.max_attempts),
            base_delay_ms: self.base_delay_ms.unwrap_or(default.base_delay_ms),
            max_delay_secs: self.max_delay_secs.unwrap_or(default.max_delay_secs),
            backoff_factor: self.backoff_factor.unwrap_or(default.backoff_factor),
            enable_jitter: self.enable_jitter.unwrap_or(default.enable_jitter),
        }
    }
}

/// Builder for LimitsConfig.
#[derive(Debug, Default)]
pub struct LimitsConfigBuilder {
    max_upload_size: Option<u64>,
    max_download_size: Option<u64>,
}

impl LimitsConfigBuilder {
    pub fn max_upload_size(mut self, size: u64) -> Self {
        self.max_upload_size = Some(size);
        self
    }

    pub fn max_download_size(mut self, size: u64) -> Self {
        self.max_download_size = Some(size);
        self
    }

    pub fn build(self) -> LimitsConfig {
        let default = LimitsConfig::default();
        LimitsConfig {
            max_upload_size: self.max_upload_size.unwrap_or(default.max_upload_size),
            max_download_size: self.max_download_size.unwrap_or(default.max_download_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        assert_eq!(config.http.base_url, "https://api.telegram.org");
        assert_eq!(config.http.request_timeout_secs, 30);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.limits.max_upload_size, 50 * 1024 * 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .http(
                HttpConfig::builder()
                    .request_timeout_secs(60)
                    .base_url("http://localhost:8081".to_string())
                    .build(),
            )
            .retry(RetryConfig::builder().max_attempts(5).build())
            .limits(LimitsConfig::builder().max_upload_size(1024).build())
            .build();

        assert_eq!(config.http.request_timeout_secs, 60);
        assert_eq!(config.http.base_url, "http://localhost:8081");
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.limits.max_upload_size, 1024);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.http.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.base_url = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.retry.backoff_factor = 0.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.limits.max_upload_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duration_conversions() {
        let config = Config::default();

        assert_eq!(config.retry_base_delay(), Duration::from_millis(500));
        assert_eq!(config.retry_max_delay(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    // Single test because the process environment is shared across threads.
    #[test]
    fn test_environment_loading() {
        unsafe {
            std::env::set_var("TGBOT_REQUEST_TIMEOUT", "60");
            std::env::set_var("TGBOT_MAX_RETRIES", "5");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.http.request_timeout_secs, 60);
        assert_eq!(config.retry.max_attempts, 5);

        unsafe {
            std::env::set_var("TGBOT_MAX_RETRIES", "invalid");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            std::env::remove_var("TGBOT_REQUEST_TIMEOUT");
            std::env::remove_var("TGBOT_MAX_RETRIES");
        }
    }
}
