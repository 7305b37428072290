use serde::Deserialize;

/// Body of add-employee and remove-employee
#[derive(Debug, Deserialize)]
pub struct MembershipRequest {
    pub username: String,
}
