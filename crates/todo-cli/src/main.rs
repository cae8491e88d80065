//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;

use todo_cli::{Cli, CliError, Commands, handlers, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve {
            port,
            database_url,
            frontend_url,
            allow_origins,
        } => {
            let config =
                handlers::serve::server_config(port, database_url, frontend_url, allow_origins);
            handlers::serve::execute(config).await
        }
        Commands::Load {
            base_url,
            timeout_secs,
        } => {
            let loader = handlers::load::build_loader(&base_url, timeout_secs)?;
            handlers::load::execute(&loader, &mut std::io::stdout().lock()).await
        }
    }
}
