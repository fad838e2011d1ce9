//! Configuration loader

use std::env;
use std::fs;
use std::path::Path;

use super::schema::{DEV_MODE_ENV_VAR, LicenseConfig, SECRET_ENV_VAR};
use crate::error::LicenseResult;

impl LicenseConfig {
    /// Read the config from the process environment.
    ///
    /// Values are read at call time, so a secret rotated in the environment
    /// is picked up by the next codec built from it.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(SECRET_ENV_VAR).filter(|s| !s.trim().is_empty());

        let dev_mode = lookup(DEV_MODE_ENV_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            secret_key,
            dev_mode,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "dev" | "development"
    )
}

/// Load configuration from a JSON file
///
/// ```json
/// { "secret_key": "...", "dev_mode": false }
/// ```
pub fn load_config(path: &Path) -> LicenseResult<LicenseConfig> {
    let config_content = fs::read_to_string(path)?;

    let config: LicenseConfig = serde_json::from_str(&config_content)?;

    config.validate()?;

    Ok(config)
}
