use crate::DepartmentMember;

use serde::Serialize;
use uuid::Uuid;

/// Department listing entry with members resolved to `{username, email}`.
/// Usernames that no longer resolve to an account are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRoster {
    pub id: Uuid,
    pub name: String,
    pub employees: Vec<DepartmentMember>,
}
