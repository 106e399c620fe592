//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.farmer-rag/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::agent::DEFAULT_ENDPOINT;

pub const ENDPOINT_ENV_VAR: &str = "FARMER_RAG_ENDPOINT";

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FarmerRagConfig {
    #[serde(default)]
    pub agent: AgentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AgentConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.farmer-rag/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".farmer-rag").join("config.toml"))
}

/// Load config from `~/.farmer-rag/config.toml`.
pub fn load_config() -> Result<FarmerRagConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(FarmerRagConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FarmerRagConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<FarmerRagConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FarmerRagConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FarmerRagConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Farmer Rag Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [agent]
# endpoint = "http://localhost:5001/api/ask"   # Or set FARMER_RAG_ENDPOINT
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` comes from the `--endpoint` flag (None = not specified).
pub fn resolve(config: &FarmerRagConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_endpoint, std::env::var(ENDPOINT_ENV_VAR).ok())
}

/// Same as [`resolve`], with the `FARMER_RAG_ENDPOINT` value passed in.
fn resolve_with_env(
    config: &FarmerRagConfig,
    cli_endpoint: Option<&str>,
    env_endpoint: Option<String>,
) -> ResolvedConfig {
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or(env_endpoint)
        .or_else(|| config.agent.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    ResolvedConfig { endpoint }
}
