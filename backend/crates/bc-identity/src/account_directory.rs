//! Account registration, login and listing.

use crate::{DirectoryError, Result as DirectoryResult};

use bc_auth::{CredentialVault, SessionIdentity, SessionIssuer};
use bc_core::{Role, User, UserSummary};
use bc_db::UserRepository;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use serde::Serialize;
use sqlx::SqlitePool;

/// Fields accepted when an account is self-registered. There is no role
/// field: registration always yields an employee.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
    pub department: Option<String>,
}

/// Successful login: the bearer token and the role it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub role: Role,
}

#[derive(Clone)]
pub struct AccountDirectory {
    users: Arc<UserRepository>,
    vault: CredentialVault,
    issuer: Arc<SessionIssuer>,
}

impl AccountDirectory {
    pub fn new(pool: SqlitePool, vault: CredentialVault, issuer: Arc<SessionIssuer>) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool)),
            vault,
            issuer,
        }
    }

    /// Create an employee account.
    ///
    /// The username pre-check gives a clean error for the common case; the
    /// UNIQUE index catches a concurrent registration that slips past it.
    pub async fn register(&self, registration: Registration) -> DirectoryResult<User> {
        let Registration {
            email,
            username,
            password,
            department,
        } = registration;

        if self.users.find_by_username(&username).await?.is_some() {
            log::warn!("Registration rejected, username '{}' is taken", username);
            return Err(DirectoryError::DuplicateUsername {
                username,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_hash = self.vault.hash(&password).await?;
        let user = User::new_employee(email, username, password_hash, department);

        match self.users.create(&user).await {
            Ok(()) => {}
            Err(e) if e.is_unique_violation() => {
                log::warn!(
                    "Registration rejected, username '{}' was taken concurrently",
                    user.username
                );
                return Err(DirectoryError::DuplicateUsername {
                    username: user.username,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        log::info!("Registered user '{}' ({})", user.username, user.id);
        Ok(user)
    }

    /// Check a username/password pair and mint a session token for it
    pub async fn login(&self, username: &str, password: &str) -> DirectoryResult<LoginResult> {
        let Some(user) = self.users.find_by_username(username).await? else {
            log::warn!("Login failed, unknown user '{}'", username);
            return Err(DirectoryError::UserNotFound {
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.vault.verify(password, &user.password_hash).await {
            log::warn!("Login failed, bad password for '{}'", username);
            return Err(DirectoryError::InvalidCredential {
                username: username.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.issuer.issue(user.id, user.role)?;
        log::info!("User '{}' logged in as {}", user.username, user.role);

        Ok(LoginResult {
            token,
            role: user.role,
        })
    }

    pub async fn list_users(&self) -> DirectoryResult<Vec<UserSummary>> {
        let users = self.users.find_all().await?;
        Ok(users.iter().map(User::summary).collect())
    }

    /// Resolve a presented bearer token to the caller's identity
    pub fn authenticate(&self, token: &str) -> DirectoryResult<SessionIdentity> {
        Ok(self.issuer.verify(token)?)
    }
}
