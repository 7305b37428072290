pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::business_unit::BusinessUnit;
pub use models::catalog_document::CatalogDocument;
pub use models::critical_system::{CriticalSystem, CriticalSystemReference};
pub use models::department::Department;
pub use models::department_member::DepartmentMember;
pub use models::department_roster::DepartmentRoster;
pub use models::role::Role;
pub use models::sub_function::SubFunction;
pub use models::user::User;
pub use models::user_summary::UserSummary;
pub use models::vendor::Vendor;

#[cfg(test)]
mod tests;
