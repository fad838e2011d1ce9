//! Wire layout of a PRO license key.
//!
//! A key is 45 upper-case alphanumeric characters:
//!
//! | offset | len | field |
//! |-------:|----:|-------|
//! | 0  | 3  | `PRO` |
//! | 3  | 2  | type code (`1M`, `6M`, `1Y`) |
//! | 5  | 8  | last 8 digits of the issue time in epoch ms |
//! | 13 | 16 | nonce, 8 random bytes as hex |
//! | 29 | 4  | user tag |
//! | 33 | 12 | truncated HMAC-SHA256 signature |
//!
//! The signature covers `type code + timestamp + nonce + user tag` exactly as
//! they appear in the key, so it can be recomputed from the key alone.

use std::ops::Range;

use serde::Serialize;

use super::result::ValidationError;
use super::types::LicenseType;
use crate::verification::USER_TAG_LEN;

pub const KEY_PREFIX: &str = "PRO";
pub const KEY_LEN: usize = 45;

pub const TYPE_CODE_LEN: usize = 2;
pub const TIMESTAMP_LEN: usize = 8;
pub const NONCE_BYTES: usize = 8;
pub const NONCE_LEN: usize = NONCE_BYTES * 2;
pub const SIGNATURE_LEN: usize = 12;

const TYPE_CODE: Range<usize> = 3..5;
const TIMESTAMP: Range<usize> = 5..13;
const NONCE: Range<usize> = 13..29;
const USER_TAG: Range<usize> = 29..29 + USER_TAG_LEN;
const SIGNATURE: Range<usize> = 33..45;

/// Modulus keeping the last [`TIMESTAMP_LEN`] decimal digits.
const TIMESTAMP_MODULUS: i64 = 100_000_000;

/// The fields of a structurally valid key. Parsing does not check the
/// signature; see [`crate::license::LicenseCodec`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseToken {
    type_code: String,
    timestamp: String,
    nonce: String,
    user_tag: String,
    signature: String,
}

impl LicenseToken {
    /// Normalize (trim, upper-case) and split a key into its fields.
    ///
    /// Anything other than 45 ASCII alphanumerics starting with `PRO` is
    /// [`ValidationError::InvalidFormat`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let key = normalize(raw);

        if key.len() != KEY_LEN
            || !key.starts_with(KEY_PREFIX)
            || !key.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(ValidationError::InvalidFormat);
        }

        Ok(Self {
            type_code: key[TYPE_CODE].to_string(),
            timestamp: key[TIMESTAMP].to_string(),
            nonce: key[NONCE].to_string(),
            user_tag: key[USER_TAG].to_string(),
            signature: key[SIGNATURE].to_string(),
        })
    }

    /// Assemble an unsigned token. Callers sign it with [`Self::signed`].
    pub(crate) fn unsigned(
        license_type: LicenseType,
        issued_at_ms: i64,
        nonce: &[u8; NONCE_BYTES],
        user_tag: String,
    ) -> Self {
        Self {
            type_code: license_type.code().to_string(),
            timestamp: truncate_timestamp(issued_at_ms),
            nonce: hex::encode_upper(nonce),
            user_tag,
            signature: String::new(),
        }
    }

    pub(crate) fn signed(self, signature: String) -> Self {
        Self { signature, ..self }
    }

    /// The string the HMAC signature is computed over.
    pub fn signing_payload(&self) -> String {
        format!(
            "{}{}{}{}",
            self.type_code, self.timestamp, self.nonce, self.user_tag
        )
    }

    /// The canonical 45-character key.
    pub fn encode(&self) -> String {
        format!("{}{}{}", KEY_PREFIX, self.signing_payload(), self.signature)
    }

    pub fn type_code(&self) -> &str {
        &self.type_code
    }

    /// `None` when the type code is not one we issue.
    pub fn license_type(&self) -> Option<LicenseType> {
        LicenseType::from_code(&self.type_code)
    }

    /// Truncated issue time, last 8 digits of epoch milliseconds.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn user_tag(&self) -> &str {
        &self.user_tag
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Trim surrounding whitespace and upper-case. Inner whitespace is kept and
/// makes the key fail the format check.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Last [`TIMESTAMP_LEN`] digits of an epoch-ms timestamp, zero padded.
pub fn truncate_timestamp(epoch_ms: i64) -> String {
    format!("{:08}", epoch_ms.rem_euclid(TIMESTAMP_MODULUS))
}
