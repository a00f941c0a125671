//! Configuration file support for snyk-component-tagger.
//!
//! Provides YAML-based configuration through
//! `snyk-component-tagger.config.yml` files, covering API endpoint and
//! retry-timing overrides. Credentials never live here; they come from
//! flags or environment variables.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "snyk-component-tagger.config.yml";

const DEFAULT_REST_API_BASE_URL: &str = "https://api.snyk.io";
const DEFAULT_V1_API_BASE_URL: &str = "https://api.snyk.io/v1";
const DEFAULT_REST_API_VERSION: &str = "2024-09-04";
const DEFAULT_TIMEOUT_SECONDS: u64 = 90;
const DEFAULT_RATE_LIMIT_BACKOFF_SECONDS: u64 = 60;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub rest_api_base_url: Option<String>,
    pub v1_api_base_url: Option<String>,
    pub api_version: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub rate_limit_backoff_seconds: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Resolved API settings: compiled-in defaults overlaid with any config
/// file values.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL of the paged REST API
    pub rest_api_base_url: String,
    /// Base URL of the legacy V1 API used by the tagging endpoint
    pub v1_api_base_url: String,
    /// REST API version pinned on every listing request
    pub api_version: String,
    /// Per-request timeout; an exceeded timeout is an ordinary failure
    pub timeout: Duration,
    /// Fixed wait after a rate-limit response before retrying
    pub rate_limit_backoff: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            rest_api_base_url: DEFAULT_REST_API_BASE_URL.to_string(),
            v1_api_base_url: DEFAULT_V1_API_BASE_URL.to_string(),
            api_version: DEFAULT_REST_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            rate_limit_backoff: Duration::from_secs(DEFAULT_RATE_LIMIT_BACKOFF_SECONDS),
        }
    }
}

impl ApiSettings {
    /// Overlays a loaded config file onto the defaults.
    pub fn from_config(config: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            rest_api_base_url: config
                .rest_api_base_url
                .clone()
                .unwrap_or(defaults.rest_api_base_url),
            v1_api_base_url: config
                .v1_api_base_url
                .clone()
                .unwrap_or(defaults.v1_api_base_url),
            api_version: config.api_version.clone().unwrap_or(defaults.api_version),
            timeout: config
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            rate_limit_backoff: config
                .rate_limit_backoff_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_backoff),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Resolves API settings from the working directory's config, if any.
pub fn resolve_settings(dir: &Path) -> Result<ApiSettings> {
    match discover_config(dir)? {
        Some(config) => Ok(ApiSettings::from_config(&config)),
        None => Ok(ApiSettings::default()),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_seconds == Some(0) {
        bail!(
            "Invalid config: timeout_seconds must be greater than zero.\n\n\
             💡 Hint: Omit the field to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECONDS
        );
    }

    for (field, value) in [
        ("rest_api_base_url", &config.rest_api_base_url),
        ("v1_api_base_url", &config.v1_api_base_url),
        ("api_version", &config.api_version),
    ] {
        if let Some(v) = value {
            if v.trim().is_empty() {
                bail!(
                    "Invalid config: {} must not be empty.\n\n\
                     💡 Hint: Omit the field to use the built-in default.",
                    field
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
