use serde_yaml::Value;

use crate::cli::types::{Commands, ConfigAction};
use crate::config::TocSettings;
use crate::utils::error::BoxResult;

/// Handle the config command
pub async fn handle_config_command(command: &Commands, settings: &TocSettings) -> BoxResult<()> {
    if let Commands::Config { action } = command {
        let yaml = serde_yaml::to_value(settings)
            .map_err(|e| format!("Failed to serialize configuration: {}", e))?;

        match action {
            Some(ConfigAction::Get { key }) => match get_nested_value(&yaml, key) {
                Some(v) => println!("{}", serde_yaml::to_string(v).unwrap_or_default().trim_end()),
                None => println!("Key not found: {}", key),
            },
            Some(ConfigAction::List {}) | None => {
                println!("{}", serde_yaml::to_string(&yaml).unwrap_or_default());
            }
        }
    }
    Ok(())
}

fn get_nested_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in key.split('.') {
        match current {
            Value::Mapping(map) => {
                let part_key = Value::String(part.to_string());
                current = map.get(&part_key)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
