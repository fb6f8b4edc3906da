//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::config::{API_URL_ENV, Config, VALID_CONFIG_KEYS};
use crate::error::{Result, TriageError};

fn unknown_key(key: &str) -> TriageError {
    TriageError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_CONFIG_KEYS.join(", ")
    ))
}

/// Where the effective endpoint comes from
fn api_url_source(config: &Config) -> &'static str {
    if std::env::var(API_URL_ENV).is_ok_and(|v| !v.is_empty()) {
        "environment"
    } else if config.api_url.is_some() {
        "config file"
    } else {
        "default"
    }
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let api_url = config.api_url();
    let source = api_url_source(&config);

    if json {
        return print_json(&json!({
            "api_url": api_url,
            "api_url_source": source,
            "request_timeout": config.request_timeout,
            "config_file": Config::config_path().to_string_lossy(),
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}: {} {}", "api_url".cyan(), api_url, format!("({source})").dimmed());
    println!(
        "{}: {}s",
        "request_timeout".cyan(),
        config.request_timeout
    );
    println!();
    println!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    );
    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;

    let value = match key {
        "api_url" => config.api_url(),
        "request_timeout" => config.request_timeout.to_string(),
        _ => return Err(unknown_key(key)),
    };

    if json {
        print_json(&json!({ "key": key, "value": value }))
    } else {
        println!("{value}");
        Ok(())
    }
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api_url" => config.set_api_url(value)?,
        "request_timeout" => config.set_request_timeout(value)?,
        _ => return Err(unknown_key(key)),
    }
    config.save()?;
    tracing::debug!(key, "updated configuration");

    if json {
        print_json(&json!({
            "action": "config_set",
            "key": key,
            "success": true,
        }))
    } else {
        println!("Set {}", key.cyan());
        Ok(())
    }
}
