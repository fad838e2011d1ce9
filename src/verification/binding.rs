//! User binding tag embedded in license keys

use sha2::{Digest, Sha256};

/// Length of the user tag in a key.
pub const USER_TAG_LEN: usize = 4;

/// Tag of a key that is not bound to any user.
pub const UNBOUND_USER_TAG: &str = "0000";

/// Compute the user binding tag
///
/// First four upper-case hex chars of SHA-256 of the user identifier, or
/// [`UNBOUND_USER_TAG`] when no identifier is given. An empty identifier
/// counts as absent.
pub fn user_tag(user_id: Option<&str>) -> String {
    match user_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let mut hasher = Sha256::new();
            hasher.update(id.as_bytes());
            let mut tag = hex::encode_upper(hasher.finalize());
            tag.truncate(USER_TAG_LEN);
            tag
        }
        None => UNBOUND_USER_TAG.to_string(),
    }
}
