use crate::{AuthError, Claims, Result as AuthErrorResult};

use bc_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Caller identity established from a verified session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub role: Role,
}

impl SessionIdentity {
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::Invalid {
            message: format!("sub is not a valid user id: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            user_id,
            role: claims.role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
