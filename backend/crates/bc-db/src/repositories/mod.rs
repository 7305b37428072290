pub mod department_repository;
pub mod user_repository;
