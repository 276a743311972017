use std::process::ExitCode;

// Module declarations
mod cli;
mod config;
mod server;
mod toc;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    // Run the CLI
    cli::run().await
}
