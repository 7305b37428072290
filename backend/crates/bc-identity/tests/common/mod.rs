#![allow(dead_code)]

use bc_auth::{CredentialVault, ManualClock, SessionIssuer};
use bc_identity::{AccountDirectory, DepartmentDirectory, Registration};

use std::sync::Arc;

use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-that-is-at-least-32-bytes";

pub async fn create_test_pool() -> SqlitePool {
    let pool = bc_db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test pool");

    bc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Argon2 at its minimum cost so tests stay fast
pub fn cheap_vault() -> CredentialVault {
    CredentialVault::new(64, 1, 1).expect("valid test parameters")
}

pub struct TestDirectories {
    pub pool: SqlitePool,
    pub clock: Arc<ManualClock>,
    pub issuer: Arc<SessionIssuer>,
    pub accounts: AccountDirectory,
    pub departments: DepartmentDirectory,
}

pub async fn create_directories() -> TestDirectories {
    let pool = create_test_pool().await;
    let clock = Arc::new(ManualClock::default());
    let issuer = Arc::new(SessionIssuer::with_clock(TEST_SECRET, 3600, clock.clone()));

    TestDirectories {
        accounts: AccountDirectory::new(pool.clone(), cheap_vault(), issuer.clone()),
        departments: DepartmentDirectory::new(pool.clone()),
        pool,
        clock,
        issuer,
    }
}

pub fn registration(username: &str, password: &str) -> Registration {
    Registration {
        email: format!("{}@example.com", username),
        username: username.to_string(),
        password: password.to_string(),
        department: None,
    }
}
