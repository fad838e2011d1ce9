/// License module - Key layout, issuing and validation
pub mod codec;
pub mod result;
pub mod token;
pub mod types;

pub use codec::{
    LicenseCodec, MAX_BATCH_QUANTITY, generate_batch_license_keys, generate_license_key,
    reconstruct_activation, validate_generated_license_key,
};
pub use result::{ActivatedLicense, ValidationError, ValidationResult};
pub use token::{KEY_LEN, KEY_PREFIX, LicenseToken};
pub use types::LicenseType;
