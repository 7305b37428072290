pub mod auth;
pub mod catalog;
pub mod departments;
pub mod error;
pub mod extractors;
pub mod message_response;
pub mod spreadsheet;
pub mod users;
