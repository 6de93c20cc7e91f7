//! Application configuration loading from config.toml
//!
//! Settings live in an optional TOML file. A missing file is not an error: the
//! service then runs with defaults. `SERVER_ADDRESS` in the environment (or `.env`)
//! overrides the file's server address.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to, e.g. `"0.0.0.0:8080"`
    pub server_address: String,
    /// Populate the `rooms` table with random rooms on start
    pub seed_rooms: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            seed_rooms: false,
        }
    }
}

/// Loads the application configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the configuration used by the binary.
///
/// Reads `CONFIG_PATH` (default `./config.toml`), falls back to defaults when the
/// file does not exist, then applies the `SERVER_ADDRESS` override.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        info!("No config file at {}, using defaults.", path);
        AppConfig::default()
    };

    if let Ok(address) = std::env::var("SERVER_ADDRESS") {
        config.server_address = address;
    }

    Ok(config)
}
