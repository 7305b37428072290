pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
    },
    catalog::{
        business_units::{create_business_unit, delete_business_unit, update_business_unit},
        catalog_requests::{
            CreateBusinessUnitRequest, CreateSubFunctionRequest, CreateVendorRequest,
            UpdateBusinessUnitRequest, UpdateSubFunctionRequest, UpdateVendorRequest,
        },
        critical_systems::{
            critical_systems_config, export_critical_systems, list_critical_systems,
            update_critical_system, update_rto,
        },
        critical_system_requests::{UpdateCriticalSystemRequest, UpdateRtoRequest},
        sub_functions::{create_sub_function, delete_sub_function, update_sub_function},
        vendors::{create_vendor, delete_vendor, update_vendor},
        visualization::{admin_visualization, database_visualization},
    },
    departments::{
        create_department_request::CreateDepartmentRequest,
        department_response::DepartmentResponse,
        departments::{add_employee, create_department, list_departments, remove_employee},
        membership_request::MembershipRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    extractors::session::{AdminSession, Session},
    message_response::MessageResponse,
    users::users::{export_users, list_users},
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
