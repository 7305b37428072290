use serde::Serialize;

/// A department member resolved against the account store for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentMember {
    pub username: String,
    pub email: String,
}
