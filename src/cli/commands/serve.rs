use log::{info, LevelFilter};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config::{validate_settings, TocSettings};
use crate::server;
use crate::server::config::ServerConfig;
use crate::utils::error::BoxResult;

/// Handle the serve command
pub async fn handle_serve_command(command: &Commands, mut settings: TocSettings) -> BoxResult<()> {
    if let Commands::Serve {
        dir,
        host,
        port,
        prefix,
        timeout,
        verbose,
    } = command
    {
        if *verbose {
            set_log_level(LevelFilter::Debug);
        }

        // Command line prefix takes precedence over the configuration files
        if let Some(prefix) = prefix {
            settings.server.path_prefix = prefix.clone();
            validate_settings(&settings)
                .map_err(|e| format!("Invalid path prefix: {}", e))?;
        }

        let root = dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let server_config = ServerConfig::new(host, *port, root)
            .with_request_timeout(Duration::from_secs(*timeout));

        info!("Starting server at {}", server_config.url());
        server::serve(&server_config, settings)
            .await
            .map_err(|e| format!("Server error: {}", e))?;
    }
    Ok(())
}
