use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "toclet")]
#[command(about = "Generates tables of contents for HTML pages from their headings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for _toc.yml, _toc.yaml or _toc.toml (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file, may be given more than once
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate tables of contents in an HTML file or a directory of HTML files
    #[command(alias = "r")]
    Render {
        /// HTML file or directory to render
        input: PathBuf,

        /// Output file, or output directory when INPUT is a directory (defaults to stdout for a file)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Render mode, e.g. edit or preview
        #[arg(short, long, value_name = "MODE")]
        mode: Option<String>,

        /// Process every page, even without a detected placeholder
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Serve a directory, generating tables of contents on the fly
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Directory to serve (defaults to ./)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT", default_value = "4000")]
        port: u16,

        /// Only pages below this path prefix are processed
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECONDS", default_value = "30")]
        timeout: u64,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Show the effective configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Actions for the config subcommand
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single value, e.g. `server.path_prefix`
    Get {
        key: String,
    },
    /// Print the whole configuration
    List {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_arguments() {
        let cli = Cli::parse_from([
            "toclet", "--debug", "render", "site", "-o", "out", "--mode", "edit", "--config", "a.yml",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.config, vec![PathBuf::from("a.yml")]);
        match cli.command {
            Commands::Render { input, output, mode, force, .. } => {
                assert_eq!(input, PathBuf::from("site"));
                assert_eq!(output, Some(PathBuf::from("out")));
                assert_eq!(mode.as_deref(), Some("edit"));
                assert!(!force);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["toclet", "serve"]);
        match cli.command {
            Commands::Serve { dir, host, port, prefix, timeout, .. } => {
                assert!(dir.is_none());
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 4000);
                assert!(prefix.is_none());
                assert_eq!(timeout, 30);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_config_actions() {
        let cli = Cli::parse_from(["toclet", "config", "get", "content_class"]);
        assert!(matches!(
            cli.command,
            Commands::Config { action: Some(ConfigAction::Get { ref key }) } if key == "content_class"
        ));

        let cli = Cli::parse_from(["toclet", "config"]);
        assert!(matches!(cli.command, Commands::Config { action: None }));
    }
}
