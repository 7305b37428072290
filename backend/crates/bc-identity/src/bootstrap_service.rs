//! One-time creation of the initial administrator.

use crate::{DirectoryError, Result as DirectoryResult};

use bc_auth::CredentialVault;
use bc_core::{Role, User};
use bc_db::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Login for the administrator created on first start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyPresent,
}

pub struct BootstrapService {
    users: UserRepository,
    vault: CredentialVault,
    settings: BootstrapSettings,
}

impl BootstrapService {
    pub fn new(pool: SqlitePool, vault: CredentialVault, settings: BootstrapSettings) -> Self {
        Self {
            users: UserRepository::new(pool),
            vault,
            settings,
        }
    }

    /// Make sure an administrator exists. Safe to call on every start.
    pub async fn ensure_admin(&self) -> DirectoryResult<BootstrapOutcome> {
        if let Some(admin) = self.users.find_first_by_role(Role::Admin).await? {
            log::info!("Administrator '{}' already present", admin.username);
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let password_hash = self.vault.hash(&self.settings.password).await?;
        let admin = User::new_admin(
            self.settings.email.clone(),
            self.settings.username.clone(),
            password_hash,
        );

        match self.users.create(&admin).await {
            Ok(()) => {
                log::info!("Created administrator '{}'", admin.username);
                Ok(BootstrapOutcome::Created)
            }
            Err(e) if e.is_unique_violation() => self.resolve_conflict().await,
            Err(e) => Err(e.into()),
        }
    }

    /// The username was taken between the check and the insert
    async fn resolve_conflict(&self) -> DirectoryResult<BootstrapOutcome> {
        let holder = self.users.find_by_username(&self.settings.username).await?;

        match holder {
            Some(user) if user.is_admin() => {
                log::info!(
                    "Administrator '{}' was created concurrently",
                    user.username
                );
                Ok(BootstrapOutcome::AlreadyPresent)
            }
            _ => {
                log::error!(
                    "Bootstrap username '{}' is held by a non-admin account",
                    self.settings.username
                );
                Err(DirectoryError::BootstrapBlocked {
                    username: self.settings.username.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
