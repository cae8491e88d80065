//! Subcommand definitions.

use clap::Subcommand;
use todo_axum::{DEFAULT_FRONTEND_URL, DEFAULT_PORT};
use todo_client::DEFAULT_BASE_URL;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the todo HTTP backend
    Serve {
        /// Port to listen on (all interfaces)
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// SQLite database URL, e.g. sqlite:todos.db
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        /// Page that form submissions redirect back to
        #[arg(long, env = "FRONTEND_URL", default_value = DEFAULT_FRONTEND_URL)]
        frontend_url: String,

        /// Restrict CORS to these origins (repeatable; default allows all)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Load the todo page once and print its data as JSON
    Load {
        /// List endpoint to fetch
        #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Request timeout in seconds (default: wait indefinitely)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
