//! Configuration schema for the license codec

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LicenseError, LicenseResult};

/// Environment variable holding the shared HMAC secret.
pub const SECRET_ENV_VAR: &str = "LICENSE_SECRET_KEY";

/// Environment variable enabling development mode.
pub const DEV_MODE_ENV_VAR: &str = "LICENSE_DEV_MODE";

/// Insecure secret used only when development mode is enabled.
/// Keys signed with it must never reach production users.
pub const DEV_DEFAULT_SECRET: &str = "pro-license-development-secret-do-not-ship";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LicenseConfig {
    /// HMAC shared secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Allow falling back to [`DEV_DEFAULT_SECRET`] when no secret is set
    #[serde(default)]
    pub dev_mode: bool,
}

impl LicenseConfig {
    /// Production config with an explicit secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret_key: Some(secret.into()),
            dev_mode: false,
        }
    }

    /// Development config; resolves to the insecure default secret.
    pub fn development() -> Self {
        Self {
            secret_key: None,
            dev_mode: true,
        }
    }

    /// Resolve the secret to sign and verify with.
    ///
    /// Order: per-call override, configured secret, development default.
    /// Empty strings are treated as unset.
    pub fn resolve_secret(&self, secret_override: Option<&str>) -> LicenseResult<String> {
        if let Some(secret) = secret_override.filter(|s| !s.is_empty()) {
            return Ok(secret.to_string());
        }

        if let Some(secret) = self.secret_key.as_deref().filter(|s| !s.is_empty()) {
            return Ok(secret.to_string());
        }

        if self.dev_mode {
            warn!("No {} set, using the insecure development secret", SECRET_ENV_VAR);
            return Ok(DEV_DEFAULT_SECRET.to_string());
        }

        Err(LicenseError::MissingSecret)
    }

    /// Validate configuration
    pub fn validate(&self) -> LicenseResult<()> {
        if let Some(secret) = &self.secret_key {
            if secret.trim().is_empty() {
                return Err(LicenseError::InvalidConfig(
                    "secret_key cannot be empty".to_string(),
                ));
            }
            if !self.dev_mode && secret == DEV_DEFAULT_SECRET {
                return Err(LicenseError::InvalidConfig(
                    "the development secret cannot be used outside development mode".to_string(),
                ));
            }
        } else if !self.dev_mode {
            return Err(LicenseError::MissingSecret);
        }

        Ok(())
    }
}
