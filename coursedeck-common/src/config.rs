//! Configuration loading and layered settings resolution
//!
//! Every service setting resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default remote store base URL (overridden in any real deployment)
pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:9000";

/// Default HTTP listen port for coursedeck-api
pub const DEFAULT_PORT: u16 = 5760;

/// Resolved service settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the remote JSON document store
    pub store_url: String,
    /// HTTP listen port
    pub port: u16,
    /// Admin bearer token; empty string disables admin auth checking
    pub admin_token: String,
}

/// Config file shape (`coursedeck/config.toml`)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub store_url: Option<String>,
    pub port: Option<u16>,
    pub admin_token: Option<String>,
}

/// Resolve service settings following the 4-tier priority order.
///
/// CLI values come in as `Option`s from clap; environment variables are
/// `COURSEDECK_STORE_URL`, `COURSEDECK_PORT`, and `COURSEDECK_ADMIN_TOKEN`.
pub fn resolve_settings(
    cli_store_url: Option<&str>,
    cli_port: Option<u16>,
    cli_admin_token: Option<&str>,
) -> Result<Settings> {
    let file = load_file_config().unwrap_or_default();

    let store_url = cli_store_url
        .map(str::to_string)
        .or_else(|| std::env::var("COURSEDECK_STORE_URL").ok())
        .or(file.store_url)
        .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());

    let port = match cli_port {
        Some(p) => p,
        None => match std::env::var("COURSEDECK_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid COURSEDECK_PORT: {}", raw)))?,
            Err(_) => file.port.unwrap_or(DEFAULT_PORT),
        },
    };

    let admin_token = cli_admin_token
        .map(str::to_string)
        .or_else(|| std::env::var("COURSEDECK_ADMIN_TOKEN").ok())
        .or(file.admin_token)
        .unwrap_or_default();

    Ok(Settings {
        store_url,
        port,
        admin_token,
    })
}

/// Parse a config file's contents
pub fn parse_file_config(toml_content: &str) -> Result<FileConfig> {
    toml::from_str(toml_content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
}

/// Load the platform config file if one exists
fn load_file_config() -> Result<FileConfig> {
    let path = config_file_path()?;
    let content = std::fs::read_to_string(&path)?;
    parse_file_config(&content)
}

/// Get default configuration file path for the platform
fn config_file_path() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/coursedeck/config.toml first, then /etc/coursedeck/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("coursedeck").join("config.toml"));
        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/coursedeck/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("coursedeck").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}
