use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_TOKEN_TTL_SECS, MAX_HASH_PARALLELISM, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: i64,
    /// Argon2id cost parameters
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set BC_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_secs <= 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be 1-{}, got {}",
                MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if self.hash_parallelism < 1 || self.hash_parallelism > MAX_HASH_PARALLELISM {
            return Err(ConfigError::auth(format!(
                "auth.hash_parallelism must be 1-{}, got {}",
                MAX_HASH_PARALLELISM, self.hash_parallelism
            )));
        }

        if self.hash_iterations < 1 {
            return Err(ConfigError::auth("auth.hash_iterations must be at least 1"));
        }

        // Argon2 needs at least 8 KiB per lane
        if self.hash_memory_kib < 8 * self.hash_parallelism {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be at least {} for parallelism {}",
                8 * self.hash_parallelism,
                self.hash_parallelism
            )));
        }

        Ok(())
    }

    /// The signing secret as bytes, empty when unset
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or_default().as_bytes()
    }
}
