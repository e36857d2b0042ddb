//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted, print_success};
use crate::config::Config;
use crate::ui::theme::ThemePreset;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "service.endpoint", "appearance.theme")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., "service.endpoint", "appearance.theme")
        key: String,

        /// Value to set ("none" clears service.timeout_secs)
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub async fn run(command: ConfigCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format).await,
        ConfigCommands::Get { key } => get(&key, format).await,
        ConfigCommands::Set { key, value } => set(&key, &value, quiet).await,
        ConfigCommands::Path => path(format).await,
    }
}

async fn show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

async fn get(key: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let value = get_config_value(&config, key)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Text => println!("{}", value),
    }

    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "endpoint"] => Ok(config.service.endpoint.clone()),
        ["service", "timeout_secs"] => Ok(config
            .service
            .timeout_secs
            .map(|s| s.to_string())
            .unwrap_or_else(|| "<not set>".to_string())),
        ["appearance", "theme"] => Ok(config.appearance.theme.name().to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

async fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    print_success(&format!("Set {} = {}", key, value), quiet);
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "endpoint"] => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("Endpoint must be an http(s) URL: {}", value);
            }
            config.service.endpoint = value.to_string();
        }
        ["service", "timeout_secs"] => {
            config.service.timeout_secs = match value {
                "none" | "" => None,
                secs => Some(secs.parse()?),
            };
        }
        ["appearance", "theme"] => {
            config.appearance.theme = ThemePreset::from_name(value)
                .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", value))?;
        }
        _ => anyhow::bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

async fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_values() {
        let config = Config::default();
        assert_eq!(
            get_config_value(&config, "service.endpoint").unwrap(),
            "http://localhost:5001/blog"
        );
        assert_eq!(get_config_value(&config, "service.timeout_secs").unwrap(), "<not set>");
        assert_eq!(get_config_value(&config, "appearance.theme").unwrap(), "Ocean");
        assert!(get_config_value(&config, "service.port").is_err());
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();

        set_config_value(&mut config, "service.endpoint", "https://example.com/blog").unwrap();
        assert_eq!(config.service.endpoint, "https://example.com/blog");

        set_config_value(&mut config, "service.timeout_secs", "45").unwrap();
        assert_eq!(config.service.timeout_secs, Some(45));
        set_config_value(&mut config, "service.timeout_secs", "none").unwrap();
        assert_eq!(config.service.timeout_secs, None);

        set_config_value(&mut config, "appearance.theme", "ember").unwrap();
        assert_eq!(config.appearance.theme, ThemePreset::Ember);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "service.endpoint", "localhost:5001").is_err());
        assert!(set_config_value(&mut config, "service.timeout_secs", "soon").is_err());
        assert!(set_config_value(&mut config, "appearance.theme", "neon").is_err());
        assert!(set_config_value(&mut config, "service.nope", "1").is_err());
        assert_eq!(config.service.endpoint, "http://localhost:5001/blog");
    }
}
