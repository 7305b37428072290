use crate::Role;

use serde::Serialize;

/// Read-only projection of a [`crate::User`] without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
}
