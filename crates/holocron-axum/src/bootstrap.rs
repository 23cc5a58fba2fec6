//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The SWAPI client is built here, every collection
//! is aggregated once, and the result is handed to the router as immutable
//! state.

use std::sync::Arc;

use anyhow::{Context, Result};
use holocron_core::{AggregatedCollection, RemotePerson, RemotePlanet, aggregate_collection};
use holocron_swapi::{DefaultSwapiClient, SwapiClientConfig};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (`Access-Control-Allow-Origin: *`).
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Upstream SWAPI client configuration.
    pub swapi: SwapiClientConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default port and upstream.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            swapi: SwapiClientConfig::default(),
            cors: CorsConfig::default(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the upstream client configuration.
    #[must_use]
    pub fn with_swapi(mut self, swapi: SwapiClientConfig) -> Self {
        self.swapi = swapi;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the collections aggregated at startup. They are never refreshed;
/// adding a refresh would need a synchronized writer.
pub struct AxumContext {
    /// Every person, in upstream order.
    pub people: Arc<AggregatedCollection<RemotePerson>>,
    /// Every planet, in upstream order.
    pub planets: Arc<AggregatedCollection<RemotePlanet>>,
}

impl AxumContext {
    /// Build a context from already aggregated collections.
    pub fn new(
        people: AggregatedCollection<RemotePerson>,
        planets: AggregatedCollection<RemotePlanet>,
    ) -> Self {
        Self {
            people: Arc::new(people),
            planets: Arc::new(planets),
        }
    }
}

/// Bootstrap the Axum server: aggregate every collection from upstream.
///
/// Collections are fetched one after another, one page at a time. Fails if
/// the first page of any collection cannot be fetched.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "holocron.bootstrap",
        upstream = config.swapi.base_url(),
        "Aggregating SWAPI collections"
    );

    let client = DefaultSwapiClient::new(&config.swapi).context("Failed to build SWAPI client")?;

    let people = aggregate_collection::<RemotePerson, _>(&client)
        .await
        .context("Failed to aggregate people")?;
    let planets = aggregate_collection::<RemotePlanet, _>(&client)
        .await
        .context("Failed to aggregate planets")?;

    if !people.is_complete() || !planets.is_complete() {
        tracing::warn!(
            target: "holocron.bootstrap",
            people_failed_pages = ?people.failed_pages(),
            planets_failed_pages = ?planets.failed_pages(),
            "Serving incomplete collections"
        );
    }

    Ok(AxumContext::new(people, planets))
}

/// Aggregate upstream data, then serve it on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("holocron listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
