pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use crate::config;
use crate::utils::error::BoxResult;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration and run the selected command
pub async fn execute(cli: &types::Cli) -> BoxResult<()> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    let explicit = if cli.config.is_empty() { None } else { Some(cli.config.clone()) };

    let settings = config::load_config(&source, explicit)
        .map_err(|e| format!("Failed to load config: {}", e))?;

    match &cli.command {
        types::Commands::Render { .. } => {
            commands::handle_render_command(&cli.command, &settings).await
        }
        types::Commands::Serve { .. } => {
            commands::handle_serve_command(&cli.command, settings).await
        }
        types::Commands::Config { .. } => {
            commands::handle_config_command(&cli.command, &settings).await
        }
    }
}
