use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with a fixed work factor: 19 MiB of memory, 2 iterations,
/// 1 lane. Every digest carries a fresh random salt, so hashing the
/// same plaintext twice produces distinct digests that both verify.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Memory cost in KiB (19 MiB).
    const M_COST_KIB: u32 = 19 * 1024;
    /// Number of iterations.
    const T_COST: u32 = 2;
    /// Degree of parallelism.
    const P_COST: u32 = 1;

    /// Create a hasher with the fixed work factor above.
    pub fn new() -> Self {
        let params = Params::new(Self::M_COST_KIB, Self::T_COST, Self::P_COST, None)
            .unwrap_or_default();
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored digest.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Digest is not a valid PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(digest).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password digest: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let digest = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &digest)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong_password", &digest)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let password = "1234";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        // Distinct salts, distinct digests, both independently valid.
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first).unwrap());
        assert!(hasher.verify(password, &second).unwrap());
    }

    #[test]
    fn test_digest_is_phc_argon2id() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("1234").expect("Failed to hash password");
        assert!(digest.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_invalid_digest() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_digest");
        assert!(result.is_err());
    }
}
