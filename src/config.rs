use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_DB_PATH, DEFAULT_ENDPOINT};
use crate::errors::{AskboxError, AskboxResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, net::SocketAddr, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Full URL the client posts questions to.
    pub endpoint: String,
    /// Address the bundled server binds to.
    pub bind_addr: String,
    pub db_path: String,
    pub log_level: String,
    /// When false, no mouse binding is attached and the send control is
    /// keyboard-only.
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
            log_level: "info".to_string(),
            mouse_capture: true,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> AskboxResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| AskboxError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| AskboxError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config
        let mut config = Config::default();

        // Try to get the endpoint from an env var
        if let Ok(endpoint) = env::var("ASKBOX_ENDPOINT") {
            config.endpoint = endpoint;
        }

        validate_config(&config)?;

        // Save default config
        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            AskboxError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| AskboxError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| AskboxError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn get_config_path() -> AskboxResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| AskboxError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("askbox").join("config.json"))
}

fn validate_config(config: &Config) -> AskboxResult<()> {
    if config.endpoint.is_empty() {
        return Err(AskboxError::config_error("Endpoint URL is required"));
    }

    if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
        return Err(AskboxError::config_error(
            "Endpoint must be an http:// or https:// URL",
        ));
    }

    if config.bind_addr.parse::<SocketAddr>().is_err() {
        return Err(AskboxError::config_error(
            "bind_addr must be a host:port address",
        ));
    }

    if config.db_path.is_empty() {
        return Err(AskboxError::config_error("db_path is required"));
    }

    match config.log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
        other => {
            return Err(AskboxError::config_error(format!(
                "Unknown log level: {}",
                other
            )))
        }
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> AskboxResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
        AskboxError::config_error(format!("Failed to create config directory: {}", e))
    })?;

    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| AskboxError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| AskboxError::config_error(format!("Failed to write config file: {}", e)))?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}
