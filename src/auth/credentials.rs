/**
 * Password Credentials
 *
 * This module owns the conversion between plaintext passwords and stored
 * credentials. Nothing outside this module calls bcrypt directly.
 *
 * # Hashing Policy
 *
 * Hashes are produced with a fixed cost factor, `HASH_COST`. A higher cost
 * slows offline brute-force attacks at the price of login latency; the
 * value is a process-wide constant, never a per-call parameter. Each hash
 * embeds a fresh random salt, so hashing the same plaintext twice yields
 * two different stored values that both verify.
 *
 * # Verification
 *
 * `verify_password` never fails: an absent stored hash means "no password
 * set" and always rejects, and an unparsable stored hash rejects rather
 * than erroring. bcrypt's comparison is constant-time-equivalent.
 */

use crate::error::AuthError;

/// bcrypt cost factor for all stored credentials
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password into a stored credential
///
/// # Arguments
/// * `plaintext` - The password to hash
///
/// # Returns
/// The bcrypt hash string (salt embedded), or `AuthError::InvalidCredential`
/// if the plaintext is empty.
///
/// # Errors
///
/// * `AuthError::InvalidCredential` - empty plaintext
/// * `AuthError::Hash` - bcrypt failure (internal)
pub fn hash_password(plaintext: &str) -> Result<String, AuthError> {
    if plaintext.is_empty() {
        return Err(AuthError::InvalidCredential);
    }
    Ok(bcrypt::hash(plaintext, HASH_COST)?)
}

/// Check a plaintext password against a stored credential
///
/// # Arguments
/// * `plaintext` - The password presented by the caller
/// * `stored_hash` - The stored credential, or `None` if no password is set
///
/// # Returns
/// `true` only when a stored hash is present and the plaintext matches it.
/// An absent or unparsable stored hash returns `false`; this function never
/// errors.
pub fn verify_password(plaintext: &str, stored_hash: Option<&str>) -> bool {
    match stored_hash {
        Some(hash) => bcrypt::verify(plaintext, hash).unwrap_or(false),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_plaintext_hashes_to_different_values() {
        let first = hash_password("password").unwrap();
        let second = hash_password("password").unwrap();

        // Fresh salt per call, yet both verify.
        assert_ne!(first, second);
        assert!(verify_password("password", Some(first.as_str())));
        assert!(verify_password("password", Some(second.as_str())));
    }

    #[test]
    fn test_wrong_plaintext_does_not_verify() {
        let hash = hash_password("password").unwrap();
        assert!(!verify_password("wrongPassword", Some(hash.as_str())));
    }

    #[test]
    fn test_absent_hash_always_rejects() {
        assert!(!verify_password("password", None));
        assert!(!verify_password("", None));
    }

    #[test]
    fn test_unparsable_hash_rejects_instead_of_erroring() {
        assert!(!verify_password("password", Some("not-a-bcrypt-hash")));
    }

    #[test]
    fn test_empty_plaintext_is_invalid() {
        let result = hash_password("");
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }
}
