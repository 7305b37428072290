pub mod account_directory;
pub mod bootstrap_service;
pub mod department_directory;
pub mod error;

pub use account_directory::{AccountDirectory, LoginResult, Registration};
pub use bootstrap_service::{BootstrapOutcome, BootstrapService, BootstrapSettings};
pub use department_directory::DepartmentDirectory;
pub use error::{DirectoryError, ErrorKind, Result};
