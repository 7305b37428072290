//! User account - the identity that logs in and receives a session token.

use crate::{Role, UserSummary};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored account.
///
/// `password_hash` is a PHC-formatted Argon2id string and is never
/// serialized; use [`UserSummary`] for anything that leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Unique login key
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display-only hint recorded at registration. Department membership is
    /// owned by the department directory.
    pub department: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a regular account. Registration never grants any other role.
    pub fn new_employee(
        email: String,
        username: String,
        password_hash: String,
        department: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            department,
            role: Role::Employee,
            created_at: Utc::now(),
        }
    }

    /// Build the bootstrap administrator account.
    pub fn new_admin(email: String, username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            department: None,
            role: Role::Admin,
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            department: self.department.clone(),
        }
    }
}
