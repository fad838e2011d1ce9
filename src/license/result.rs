//! Outcomes of key validation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::LicenseType;
use crate::verification::user_tag;

/// Why a key was rejected. The display strings are part of the wire result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Wrong prefix, length or alphabet.
    #[error("invalid format")]
    InvalidFormat,

    /// Type code is not `1M`, `6M` or `1Y`.
    #[error("invalid license type")]
    InvalidLicenseType,

    /// Signature mismatch: tampering, corruption or a different secret.
    #[error("invalid or corrupted key")]
    InvalidSignature,
}

/// A key that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedLicense {
    pub license_type: LicenseType,
    /// Approximate. Reconstructed from the 8-digit fragment when plausible,
    /// otherwise the validation time.
    pub activated_at: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    /// `0000` for keys not bound to a user.
    pub user_tag: String,
}

impl ActivatedLicense {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiration_date
    }

    /// Whole days left, zero once expired.
    pub fn days_remaining_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expiration_date - now).num_days().max(0)
    }

    /// Whether the key was issued for `user_id`. Unbound keys match `None`.
    ///
    /// The tag is only 16 bits, so this separates users, it does not
    /// authenticate them.
    pub fn is_bound_to(&self, user_id: Option<&str>) -> bool {
        self.user_tag == user_tag(user_id)
    }
}

/// Wire-shaped validation outcome.
///
/// ```json
/// {"valid":true,"licenseType":"1_year","activatedAt":"...","expirationDate":"..."}
/// {"valid":false,"error":"invalid format"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_type: Option<LicenseType>,
    /// ISO-8601, UTC, millisecond precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            valid: false,
            license_type: None,
            activated_at: None,
            expiration_date: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<&ActivatedLicense> for ValidationResult {
    fn from(license: &ActivatedLicense) -> Self {
        Self {
            valid: true,
            license_type: Some(license.license_type),
            activated_at: Some(to_iso8601(license.activated_at)),
            expiration_date: Some(to_iso8601(license.expiration_date)),
            error: None,
        }
    }
}

impl From<Result<ActivatedLicense, ValidationError>> for ValidationResult {
    fn from(outcome: Result<ActivatedLicense, ValidationError>) -> Self {
        match outcome {
            Ok(license) => Self::from(&license),
            Err(error) => Self::invalid(error),
        }
    }
}

/// `2026-10-19T08:30:00.000Z`
pub fn to_iso8601(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
