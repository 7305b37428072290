//! Password hashing and verification.
//!
//! Argon2id digests in PHC string format. Both operations are CPU-bound and
//! run on tokio's blocking pool so request workers keep moving.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

#[derive(Debug, Clone)]
pub struct CredentialVault {
    params: Params,
}

impl CredentialVault {
    /// Build a vault with explicit Argon2 cost parameters
    #[track_caller]
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::Hashing {
                message: format!("invalid Argon2 parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self { params })
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `plaintext` with a fresh random salt
    pub async fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let hasher = self.hasher();
        let plaintext = plaintext.to_owned();

        let digest = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            hasher
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|e| AuthError::Hashing {
            message: format!("hashing task failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?
        .map_err(|e| AuthError::Hashing {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(digest)
    }

    /// Check `plaintext` against a stored digest. A digest that does not
    /// parse counts as a mismatch.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || Self::verify_blocking(&plaintext, &digest))
            .await
            .unwrap_or(false)
    }

    /// Synchronous verification. Cost parameters are read from the digest.
    pub fn verify_blocking(plaintext: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for CredentialVault {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}
