use bc_auth::{CredentialVault, SessionIssuer};
use bc_identity::{AccountDirectory, DepartmentDirectory};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Everything in here is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub accounts: AccountDirectory,
    pub departments: DepartmentDirectory,
}

impl AppState {
    pub fn new(pool: SqlitePool, vault: CredentialVault, issuer: Arc<SessionIssuer>) -> Self {
        Self {
            accounts: AccountDirectory::new(pool.clone(), vault, issuer),
            departments: DepartmentDirectory::new(pool.clone()),
            pool,
        }
    }
}
