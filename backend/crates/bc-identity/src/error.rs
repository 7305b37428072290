use bc_auth::AuthError;
use bc_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coarse outcome class the HTTP layer maps to a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidCredential,
    Unauthorized,
    Persistence,
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User not found: {username} {location}")]
    UserNotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("Department not found: {name} {location}")]
    DepartmentNotFound {
        name: String,
        location: ErrorLocation,
    },

    #[error("User {username} is not a member of {department} {location}")]
    NotAMember {
        department: String,
        username: String,
        location: ErrorLocation,
    },

    #[error("Username already taken: {username} {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("Department already exists: {name} {location}")]
    DuplicateDepartment {
        name: String,
        location: ErrorLocation,
    },

    #[error("User {username} is already a member of {department} {location}")]
    AlreadyMember {
        department: String,
        username: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials for {username} {location}")]
    InvalidCredential {
        username: String,
        location: ErrorLocation,
    },

    /// The bootstrap login is held by an account without the admin role
    #[error("Bootstrap username {username} belongs to a non-admin account {location}")]
    BootstrapBlocked {
        username: String,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Persistence error: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound { .. }
            | Self::DepartmentNotFound { .. }
            | Self::NotAMember { .. } => ErrorKind::NotFound,
            Self::DuplicateUsername { .. }
            | Self::DuplicateDepartment { .. }
            | Self::AlreadyMember { .. } => ErrorKind::Conflict,
            Self::InvalidCredential { .. } => ErrorKind::InvalidCredential,
            Self::Auth { source, .. } if source.is_unauthorized() => ErrorKind::Unauthorized,
            Self::Auth { .. } | Self::BootstrapBlocked { .. } | Self::Persistence { .. } => {
                ErrorKind::Persistence
            }
        }
    }
}

impl From<AuthError> for DirectoryError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for DirectoryError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
