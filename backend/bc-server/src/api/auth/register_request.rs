use serde::Deserialize;

/// Self-registration payload.
///
/// There is deliberately no `role` field: unknown fields, including a
/// client-supplied role, are discarded.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,

    /// Department name, recorded for display only
    #[serde(default)]
    pub department: Option<String>,
}
