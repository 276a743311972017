use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::defaults;
use crate::config::types::{ServerSettings, TocSettings};
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_toc.yml", "_toc.yaml", "_toc.toml"];

/// Load TOC settings from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<TocSettings> {
    // Start with default configuration
    let mut settings = TocSettings::default();

    // Load configuration from specified files or defaults
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut settings, &path)?;
        }
    }

    validation::validate_settings(&settings)?;

    debug!("Configuration loaded: {:?}", settings);
    Ok(settings)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current settings
fn merge_config_file(settings: &mut TocSettings, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let file_settings: TocSettings = match config_path.extension() {
        Some(ext) => {
            let ext_str = ext.to_string_lossy().to_lowercase();
            match ext_str.as_str() {
                "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
                "toml" => parse_toml_config(&content, config_path)?,
                "json" => parse_json_config(&content, config_path)?,
                _ => {
                    return Err(TocError::Config(format!(
                        "Unsupported configuration file format: {}", ext.to_string_lossy()
                    )).into());
                }
            }
        }
        // Assume YAML if no extension
        None => parse_yaml_config(&content, config_path)?,
    };

    merge_settings(settings, &file_settings);

    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<TocSettings> {
    // An empty YAML document is a valid, all-default configuration
    if content.trim().is_empty() {
        return Ok(TocSettings::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<TocSettings> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<TocSettings> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

/// Merge two configurations, only overriding values that differ from the defaults
fn merge_settings(target: &mut TocSettings, source: &TocSettings) {
    if source.placeholder_class != defaults::default_placeholder_class() {
        target.placeholder_class = source.placeholder_class.clone();
    }

    if source.content_class != defaults::default_content_class() {
        target.content_class = source.content_class.clone();
    }

    if source.template_placeholder_class != defaults::default_template_placeholder_class() {
        target.template_placeholder_class = source.template_placeholder_class.clone();
    }

    if source.default_list_type != Default::default() {
        target.default_list_type = source.default_list_type;
    }

    if source.default_start_level != defaults::default_start_level() {
        target.default_start_level = source.default_start_level;
    }

    if source.default_stop_level != defaults::default_stop_level() {
        target.default_stop_level = source.default_stop_level;
    }

    merge_server_settings(&mut target.server, &source.server);
}

fn merge_server_settings(target: &mut ServerSettings, source: &ServerSettings) {
    if source.path_prefix != defaults::default_path_prefix() {
        target.path_prefix = source.path_prefix.clone();
    }

    if source.max_body_bytes != defaults::default_max_body_bytes() {
        target.max_body_bytes = source.max_body_bytes;
    }
}
