//! HTTP backend abstraction for the SWAPI client.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with bounded retry for transient errors.

use crate::error::{SwapiError, SwapiResult};
use crate::models::SwapiConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `PageSource` port.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SwapiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Network errors and 5xx responses are retried with exponential backoff,
/// at most `max_retries` times; past that the fetch fails with
/// `RetriesExhausted`. 4xx responses and body decoding errors are never
/// retried.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &SwapiConfig) -> SwapiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Delay before retry number `attempt` (1-based).
    fn backoff(&self, attempt: u8) -> Duration {
        let factor = 2u64.saturating_pow(u32::from(attempt) - 1);
        Duration::from_millis(self.retry_base_delay_ms.saturating_mul(factor))
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> SwapiResult<reqwest::Response> {
        let mut attempt: u8 = 0;

        loop {
            if attempt > 0 {
                tokio::time::sleep(self.backoff(attempt)).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() {
                        if attempt < self.max_retries {
                            tracing::debug!(%url, status = status.as_u16(), attempt, "Retrying after server error");
                            attempt += 1;
                            continue;
                        }
                        return Err(SwapiError::RetriesExhausted {
                            attempts: u32::from(attempt) + 1,
                            url: url.to_string(),
                            message: format!("server returned {status}"),
                        });
                    }

                    // 4xx errors are not retried
                    return Err(SwapiError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        tracing::debug!(%url, error = %e, attempt, "Retrying after network error");
                        attempt += 1;
                        continue;
                    }
                    return Err(SwapiError::RetriesExhausted {
                        attempts: u32::from(attempt) + 1,
                        url: url.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SwapiResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let body = response.bytes().await?;
        let data: T = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
