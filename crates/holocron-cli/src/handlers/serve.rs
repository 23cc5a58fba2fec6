//! Serve command handler.

use anyhow::Result;

use crate::commands::ServeArgs;

/// Execute the serve command.
///
/// Runs until the server stops; startup fails if the first page of a
/// collection cannot be fetched.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let config = args.server_config();

    tracing::info!(
        port = config.port,
        upstream = config.swapi.base_url(),
        "Starting holocron server"
    );

    holocron_axum::start_server(config).await
}
