//! PRO license keys.
//!
//! Issues compact, self-verifying license keys and validates them offline
//! against a shared HMAC secret:
//!
//! ```text
//! PRO 1Y 34567890 A1B2C3D4E5F60718 FF8D 0123456789AB
//! ^   ^  ^        ^                ^    ^
//! |   |  |        |                |    truncated HMAC-SHA256
//! |   |  |        |                user tag (SHA-256 of user id, or 0000)
//! |   |  |        nonce (8 random bytes)
//! |   |  last 8 digits of issue time, epoch ms
//! |   type code (1M, 6M, 1Y)
//! prefix
//! ```
//!
//! Keys are written without the spaces shown above (45 characters).
//!
//! ```no_run
//! use pro_license::{LicenseCodec, LicenseConfig, LicenseType};
//!
//! let codec = LicenseCodec::from_config(&LicenseConfig::from_env())?;
//! let key = codec.generate_license_key(LicenseType::OneYear, Some("user@example.com"));
//! let license = codec.validate_key(&key).expect("freshly issued key");
//! assert_eq!(license.license_type, LicenseType::OneYear);
//! # Ok::<(), pro_license::LicenseError>(())
//! ```

pub mod config;
pub mod error;
pub mod license;
pub mod verification;

pub use config::{LicenseConfig, load_config};
pub use error::{LicenseError, LicenseResult};
pub use license::{
    ActivatedLicense, LicenseCodec, LicenseToken, LicenseType, ValidationError, ValidationResult,
    generate_batch_license_keys, generate_license_key, validate_generated_license_key,
};
