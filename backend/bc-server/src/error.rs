use thiserror::Error;

/// Failures that stop the process before or while it starts serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] bc_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] bc_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] bc_auth::AuthError),

    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] bc_identity::DirectoryError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
