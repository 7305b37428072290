use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bad signature, malformed token, or a claim that does not decode
    #[error("Invalid token: {message} {location}")]
    Invalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    /// The configured lifetime does not fit a timestamp
    #[error("Token lifetime out of range: {ttl_secs}s {location}")]
    Lifetime { ttl_secs: i64, location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code, used in logs only. Callers see a single
    /// "unauthorized" outcome.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "INVALID_TOKEN",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::Signing { .. } => "TOKEN_SIGNING_FAILED",
            Self::Lifetime { .. } => "TOKEN_LIFETIME_OUT_OF_RANGE",
            Self::Hashing { .. } => "HASHING_FAILED",
        }
    }

    /// True for failures caused by the presented credential rather than by
    /// the server.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Invalid { .. }
                | Self::Expired { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
