pub mod business_units;
pub mod catalog_ops;
pub mod catalog_requests;
pub mod critical_system_requests;
pub mod critical_systems;
pub mod sub_functions;
pub mod vendors;
pub mod visualization;
