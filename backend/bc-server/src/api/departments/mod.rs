pub mod create_department_request;
pub mod department_response;
pub mod departments;
pub mod membership_request;
