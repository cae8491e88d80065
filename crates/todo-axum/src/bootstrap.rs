//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use todo_core::TodoService;
use todo_db::{build_repos, setup_database};

/// Port the backend listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8000;

/// Where form submissions redirect to unless configured otherwise.
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `sqlx` `SQLite` URL of the todo database.
    pub database_url: String,
    /// Page the form routes redirect back to.
    pub frontend_url: String,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create a config for the given database with default port, frontend and CORS.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: database_url.into(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            cors: CorsConfig::default(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the redirect target for form routes.
    #[must_use]
    pub fn with_frontend_url(mut self, url: impl Into<String>) -> Self {
        self.frontend_url = url.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Application context for the Axum adapter.
#[derive(Clone)]
pub struct AxumContext {
    /// Todo operations backed by the configured repository.
    pub todos: TodoService,
    /// Page the form routes redirect back to.
    pub frontend_url: String,
}

impl AxumContext {
    pub fn new(todos: TodoService, frontend_url: impl Into<String>) -> Self {
        Self {
            todos,
            frontend_url: frontend_url.into(),
        }
    }
}

/// Bootstrap the Axum server: open the database and wire the services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "todolist.server",
        database_url = %config.database_url,
        frontend_url = %config.frontend_url,
        "Axum bootstrap"
    );

    let pool = setup_database(&config.database_url).await?;
    let repos = build_repos(pool);

    Ok(AxumContext::new(
        TodoService::from_repos(&repos),
        config.frontend_url.clone(),
    ))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("todolist server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
