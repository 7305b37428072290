use bc_core::Department;

use serde::Serialize;

/// A message plus the department as it stands after the change
#[derive(Debug, Serialize)]
pub struct DepartmentResponse {
    pub message: String,
    pub department: Department,
}
