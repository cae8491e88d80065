//! Serve command handler.

use todo_axum::{ServerConfig, start_server};

use crate::error::CliError;

/// Build the server configuration from `todo serve` arguments.
///
/// An empty origin list keeps the permissive CORS default.
pub fn server_config(
    port: u16,
    database_url: String,
    frontend_url: String,
    allow_origins: Vec<String>,
) -> ServerConfig {
    let config = ServerConfig::new(database_url)
        .with_port(port)
        .with_frontend_url(frontend_url);

    if allow_origins.is_empty() {
        config
    } else {
        config.with_allowed_origins(allow_origins)
    }
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(config: ServerConfig) -> Result<(), CliError> {
    start_server(config)
        .await
        .map_err(|e| CliError::Server(format!("{e:#}")))
}
