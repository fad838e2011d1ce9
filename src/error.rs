//! Error types for license issuing and configuration

use thiserror::Error;

/// Errors raised while configuring the codec or issuing keys.
///
/// Validation of a key never produces this type; see
/// [`crate::license::ValidationError`].
#[derive(Debug, Error)]
pub enum LicenseError {
    /// A license type name did not match `1_month`, `6_months` or `1_year`.
    #[error("unknown license type: {0}")]
    UnknownLicenseType(String),

    /// No secret was configured and development mode is off.
    #[error("no license secret configured (set LICENSE_SECRET_KEY or enable development mode)")]
    MissingSecret,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("batch quantity {0} exceeds the maximum of {max}", max = crate::license::MAX_BATCH_QUANTITY)]
    InvalidQuantity(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
