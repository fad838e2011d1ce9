/// Verification module - HMAC signing and user binding
pub mod binding;
pub mod hmac;

pub use binding::{UNBOUND_USER_TAG, USER_TAG_LEN, user_tag};
pub use hmac::{create_signature, create_truncated_signature, verify_truncated_signature};
