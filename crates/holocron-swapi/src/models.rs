//! Internal client configuration, derived from the public `SwapiClientConfig`.

use std::time::Duration;
use url::Url;

use crate::config::{DEFAULT_BASE_URL, SwapiClientConfig};
use crate::error::SwapiResult;

/// Internal configuration for the SWAPI client.
#[derive(Debug, Clone)]
pub struct SwapiConfig {
    /// API root (default: <http://swapi.dev/api>)
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts after the first failure (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl SwapiConfig {
    /// Validate and convert the public configuration.
    pub fn from_public(config: &SwapiClientConfig) -> SwapiResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default SWAPI URL is valid"),
            user_agent: "holocron-swapi".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}
