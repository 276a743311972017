use log::info;

use crate::config::TocSettings;
use crate::utils::error::{BoxResult, TocError};

/// Validate the settings
pub fn validate_settings(settings: &TocSettings) -> BoxResult<()> {
    validate_levels(settings)?;

    validate_class_name("placeholder_class", &settings.placeholder_class)?;
    validate_class_name("content_class", &settings.content_class)?;
    validate_class_name("template_placeholder_class", &settings.template_placeholder_class)?;

    validate_server(settings)?;

    Ok(())
}

/// Validate the default heading level range
fn validate_levels(settings: &TocSettings) -> BoxResult<()> {
    for (name, level) in [
        ("default_start_level", settings.default_start_level),
        ("default_stop_level", settings.default_stop_level),
    ] {
        if !(1..=6).contains(&level) {
            return Err(TocError::Config(format!(
                "{} must be between 1 and 6, got {}", name, level
            )).into());
        }
    }

    if settings.default_start_level > settings.default_stop_level {
        return Err(TocError::InvalidLevels {
            start: settings.default_start_level,
            stop: settings.default_stop_level,
        }.into());
    }

    Ok(())
}

/// Class names end up in selectors, so they must be a single non-empty token
fn validate_class_name(name: &str, value: &str) -> BoxResult<()> {
    if value.is_empty() {
        return Err(TocError::Config(format!("{} must not be empty", name)).into());
    }

    if value.chars().any(char::is_whitespace) || value.starts_with('.') {
        return Err(TocError::Config(format!(
            "{} must be a bare class name, got '{}'", name, value
        )).into());
    }

    Ok(())
}

/// Validate the server section
fn validate_server(settings: &TocSettings) -> BoxResult<()> {
    if settings.server.max_body_bytes == 0 {
        return Err(TocError::Config("server.max_body_bytes must be greater than 0".to_string()).into());
    }

    if !settings.server.path_prefix.starts_with('/') {
        return Err(TocError::Config(format!(
            "server.path_prefix must start with '/', got '{}'", settings.server.path_prefix
        )).into());
    }

    info!(
        "TOC placeholders: .{} (levels {}-{})",
        settings.placeholder_class, settings.default_start_level, settings.default_stop_level
    );
    Ok(())
}
