//! HMAC-SHA256 signature generation and validation

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Create HMAC-SHA256 signature
///
/// # Arguments
/// * `data` - Data to sign (type code + timestamp + nonce + user tag)
/// * `secret` - Shared secret key
///
/// # Returns
/// Upper-case hex-encoded HMAC signature (64 chars)
pub fn create_signature(data: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

/// Signature truncated to its first `len` hex chars.
pub fn create_truncated_signature(data: &str, secret: &str, len: usize) -> String {
    let mut signature = create_signature(data, secret);
    signature.truncate(len);
    signature
}

/// Verify a truncated HMAC signature
///
/// The expected signature is truncated to the length of `signature`, so an
/// empty candidate never verifies. Comparison is constant-time.
pub fn verify_truncated_signature(data: &str, secret: &str, signature: &str) -> bool {
    if signature.is_empty() {
        return false;
    }
    let expected = create_truncated_signature(data, secret, signature.len());

    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_signature() {
        let data = "1Y12345678ABCDEF01234567890000";
        let secret = "my_secret_key";

        let sig1 = create_signature(data, secret);
        let sig2 = create_signature(data, secret);

        // Same input should produce same signature
        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);

        // Upper-case hex only
        assert!(sig1.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert!(sig1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2
        let sig = create_signature("what do ya want for nothing?", "Jefe");
        assert_eq!(
            sig,
            "5BDCC146BF60754E6A042426089575C75A003F089D2739839DEC58B964EC3843"
        );
    }

    #[test]
    fn test_truncated_signature() {
        let full = create_signature("payload", "secret");
        let short = create_truncated_signature("payload", "secret", 12);
        assert_eq!(short.len(), 12);
        assert!(full.starts_with(&short));
    }

    #[test]
    fn test_verify_truncated_signature() {
        let data = "test_data";
        let secret = "test_secret";

        let signature = create_truncated_signature(data, secret, 12);
        assert!(verify_truncated_signature(data, secret, &signature));

        // Wrong secret should fail
        assert!(!verify_truncated_signature(data, "wrong_secret", &signature));

        // Wrong data should fail
        assert!(!verify_truncated_signature("wrong_data", secret, &signature));

        // Lower-case signature is not the canonical form
        assert!(!verify_truncated_signature(data, secret, &signature.to_lowercase()));

        assert!(!verify_truncated_signature(data, secret, ""));
    }
}
