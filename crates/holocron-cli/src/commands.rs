//! Available subcommands.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use holocron_axum::ServerConfig;
use holocron_swapi::SwapiClientConfig;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every SWAPI person and planet, then serve them over HTTP
    Serve(ServeArgs),

    /// Count customer email addresses per domain
    ImportCustomers {
        /// CSV file whose third column holds the email address
        #[arg(default_value = "customers.csv")]
        path: PathBuf,
    },
}

/// Options for `serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "HOLOCRON_PORT", default_value_t = holocron_axum::bootstrap::DEFAULT_PORT)]
    pub port: u16,

    /// Base URL of the upstream API
    #[arg(long, env = "SWAPI_BASE_URL", default_value = holocron_swapi::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Retries per page after the first attempt
    #[arg(long, env = "SWAPI_MAX_RETRIES", default_value_t = 3)]
    pub max_retries: u8,

    /// Base delay between retries, doubled on each attempt
    #[arg(long, env = "SWAPI_RETRY_DELAY_MS", default_value_t = 500)]
    pub retry_delay_ms: u64,

    /// Per-request timeout
    #[arg(long, env = "SWAPI_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Restrict CORS to these origins (repeatable); all origins when omitted
    #[arg(long = "allow-origin")]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    /// Build the server configuration these flags describe.
    pub fn server_config(&self) -> ServerConfig {
        let swapi = SwapiClientConfig::new()
            .with_base_url(self.base_url.clone())
            .with_max_retries(self.max_retries)
            .with_retry_delay(Duration::from_millis(self.retry_delay_ms))
            .with_timeout(Duration::from_secs(self.timeout_secs));

        let config = ServerConfig::with_defaults()
            .with_port(self.port)
            .with_swapi(swapi);

        if self.allowed_origins.is_empty() {
            config
        } else {
            config.with_allowed_origins(self.allowed_origins.clone())
        }
    }
}
