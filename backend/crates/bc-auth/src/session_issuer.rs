use crate::{AuthError, Claims, Clock, Result as AuthErrorResult, SessionIdentity, SystemClock};

use bc_core::Role;

use std::panic::Location;
use std::sync::Arc;

use chrono::TimeDelta;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Session tokens live for one hour unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Mints and verifies HS256 session tokens.
///
/// Expiry is checked against the injected [`Clock`] rather than inside
/// `jsonwebtoken`, so the validity window can be tested deterministically.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl SessionIssuer {
    /// Create an issuer with HS256 and the wall clock
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> Self {
        Self::with_clock(secret, ttl_secs, Arc::new(SystemClock))
    }

    pub fn with_clock(secret: &[u8], ttl_secs: i64, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
            clock,
        }
    }

    /// Issue a token for `user_id` carrying `role`, valid for the configured
    /// window from now.
    pub fn issue(&self, user_id: Uuid, role: Role) -> AuthErrorResult<String> {
        let issued_at = self.clock.now();
        let expires_at = TimeDelta::try_seconds(self.ttl_secs)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::Lifetime {
                ttl_secs: self.ttl_secs,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::Signing {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry, returning who the caller is
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<SessionIdentity> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                AuthError::Invalid {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        if self.clock.now().timestamp() > claims.exp {
            return Err(AuthError::Expired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        SessionIdentity::from_claims(claims)
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
