pub mod catalog_repository;
pub mod document;
pub mod document_store;
pub mod filter;
