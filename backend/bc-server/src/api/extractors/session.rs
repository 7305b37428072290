//! Axum extractors for bearer-token sessions

use crate::{AppState, ApiError};

use bc_auth::{SessionIdentity, parse_bearer};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use http::header::AUTHORIZATION;

/// The caller behind a verified `Authorization: Bearer` token.
///
/// Rejects with 401 when the header is missing, malformed, or carries a
/// token that fails verification.
pub struct Session(pub SessionIdentity);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = parse_bearer(header)?;
            let identity = state.accounts.authenticate(token)?;

            log::debug!("Session for user {} ({})", identity.user_id, identity.role);
            Ok(Session(identity))
        }
    }
}

/// A [`Session`] that also holds the admin role. Employees get 403.
pub struct AdminSession(pub SessionIdentity);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Session(identity) = Session::from_request_parts(parts, state).await?;

            if !identity.is_admin() {
                log::warn!(
                    "User {} ({}) denied admin-only {} {}",
                    identity.user_id,
                    identity.role,
                    parts.method,
                    parts.uri.path()
                );
                return Err(ApiError::Forbidden {
                    message: "admin role required".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            Ok(AdminSession(identity))
        }
    }
}
