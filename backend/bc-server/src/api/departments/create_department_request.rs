use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub name: String,

    /// Initial member usernames, taken as given
    #[serde(default, alias = "employees")]
    pub employee_ids: Vec<String>,
}
