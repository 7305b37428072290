pub mod business_unit;
pub mod catalog_document;
pub mod critical_system;
pub mod department;
pub mod department_member;
pub mod department_roster;
pub mod role;
pub mod sub_function;
pub mod user;
pub mod user_summary;
pub mod vendor;
