//! Issuing and verifying PRO license keys.
//!
//! Verification is offline: a key carries everything needed to recompute its
//! signature, so the only shared state is the HMAC secret.

use std::fmt;

use chrono::{DateTime, Datelike, Months, Utc};
use tracing::debug;

use super::result::{ActivatedLicense, ValidationError, ValidationResult};
use super::token::{LicenseToken, NONCE_BYTES, SIGNATURE_LEN};
use super::types::LicenseType;
use crate::config::LicenseConfig;
use crate::error::{LicenseError, LicenseResult};
use crate::verification::{create_truncated_signature, user_tag, verify_truncated_signature};

/// Upper bound for a single batch.
pub const MAX_BATCH_QUANTITY: usize = 10_000;

/// Reconstructed activation dates older than this are discarded.
const MAX_ACTIVATION_AGE_YEARS: u32 = 10;

/// Signs and verifies keys with one secret.
///
/// Cheap to clone and safe to share between threads; every call is a pure
/// function of its inputs plus fresh randomness.
#[derive(Clone)]
pub struct LicenseCodec {
    secret: String,
}

impl fmt::Debug for LicenseCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseCodec")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl LicenseCodec {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Build a codec from config, honoring the development-mode fallback.
    pub fn from_config(config: &LicenseConfig) -> LicenseResult<Self> {
        config.resolve_secret(None).map(Self::new)
    }

    /// Issue a new key, optionally bound to `user_id`.
    pub fn generate_license_key(&self, license_type: LicenseType, user_id: Option<&str>) -> String {
        self.generate_at(license_type, user_id, Utc::now())
    }

    /// Issue a key as if it were `now`.
    pub fn generate_at(
        &self,
        license_type: LicenseType,
        user_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> String {
        let nonce: [u8; NONCE_BYTES] = rand::random();
        let token =
            LicenseToken::unsigned(license_type, now.timestamp_millis(), &nonce, user_tag(user_id));

        let signature =
            create_truncated_signature(&token.signing_payload(), &self.secret, SIGNATURE_LEN);
        let token = token.signed(signature);

        debug!(
            license_type = %license_type,
            nonce_prefix = &token.nonce()[..4],
            bound = user_id.is_some(),
            "Issued license key"
        );
        token.encode()
    }

    /// Issue `quantity` independent keys. No deduplication is done; with a
    /// 64-bit nonce collisions are not a practical concern.
    pub fn generate_batch_license_keys(
        &self,
        license_type: LicenseType,
        quantity: usize,
    ) -> LicenseResult<Vec<String>> {
        if quantity > MAX_BATCH_QUANTITY {
            return Err(LicenseError::InvalidQuantity(quantity));
        }

        let keys = (0..quantity)
            .map(|_| self.generate_license_key(license_type, None))
            .collect();
        debug!(license_type = %license_type, quantity, "Issued license batch");
        Ok(keys)
    }

    /// Verify a key and resolve its type and validity window.
    pub fn validate_key(&self, key: &str) -> Result<ActivatedLicense, ValidationError> {
        self.validate_key_at(key, Utc::now())
    }

    pub fn validate_key_at(
        &self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<ActivatedLicense, ValidationError> {
        let outcome = self.verify(key, now);
        if let Err(e) = &outcome {
            debug!(reason = %e, "Rejected license key");
        }
        outcome
    }

    /// Wire-shaped variant of [`Self::validate_key`].
    pub fn validate_generated_license_key(&self, key: &str) -> ValidationResult {
        self.validate_key(key).into()
    }

    fn verify(&self, key: &str, now: DateTime<Utc>) -> Result<ActivatedLicense, ValidationError> {
        let token = LicenseToken::parse(key)?;

        let license_type = token
            .license_type()
            .ok_or(ValidationError::InvalidLicenseType)?;

        if !verify_truncated_signature(&token.signing_payload(), &self.secret, token.signature()) {
            return Err(ValidationError::InvalidSignature);
        }

        let activated_at = reconstruct_activation(token.timestamp(), now);

        Ok(ActivatedLicense {
            license_type,
            activated_at,
            expiration_date: activated_at + license_type.duration(),
            user_tag: token.user_tag().to_string(),
        })
    }
}

/// Approximate the activation time from the 8-digit timestamp fragment.
///
/// The current year is prefixed to the fragment and the result read as epoch
/// milliseconds. A value that is unparseable, in the future or more than ten
/// years old is replaced by `now`. This is a heuristic, not a recovery of the
/// issue time: for present-day clocks the prefixed value lands decades in the
/// past, so the fallback is what normally applies.
pub fn reconstruct_activation(fragment: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let oldest = now
        .checked_sub_months(Months::new(12 * MAX_ACTIVATION_AGE_YEARS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    format!("{}{}", now.year(), fragment)
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .filter(|candidate| *candidate <= now && *candidate >= oldest)
        .unwrap_or(now)
}

/// Issue a key using the secret from the environment, or `secret_key` if given.
pub fn generate_license_key(
    license_type: LicenseType,
    user_id: Option<&str>,
    secret_key: Option<&str>,
) -> LicenseResult<String> {
    let secret = LicenseConfig::from_env().resolve_secret(secret_key)?;
    Ok(LicenseCodec::new(secret).generate_license_key(license_type, user_id))
}

/// Validate a key using the secret from the environment, or `secret_key` if
/// given. Only a missing secret is an `Err`; a bad key is `valid: false`.
pub fn validate_generated_license_key(
    key: &str,
    secret_key: Option<&str>,
) -> LicenseResult<ValidationResult> {
    let secret = LicenseConfig::from_env().resolve_secret(secret_key)?;
    Ok(LicenseCodec::new(secret).validate_generated_license_key(key))
}

/// Issue `quantity` keys using the secret from the environment, or
/// `secret_key` if given.
pub fn generate_batch_license_keys(
    license_type: LicenseType,
    quantity: usize,
    secret_key: Option<&str>,
) -> LicenseResult<Vec<String>> {
    let secret = LicenseConfig::from_env().resolve_secret(secret_key)?;
    LicenseCodec::new(secret).generate_batch_license_keys(license_type, quantity)
}
