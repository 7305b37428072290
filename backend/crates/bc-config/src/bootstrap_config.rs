use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD,
    DEFAULT_ADMIN_USERNAME,
};

use serde::Deserialize;

/// Administrator account created on first start
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_username: String::from(DEFAULT_ADMIN_USERNAME),
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            admin_password: String::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.admin_username.trim().is_empty() {
            return Err(ConfigError::bootstrap(
                "bootstrap.admin_username must not be empty",
            ));
        }

        if self.admin_password.is_empty() {
            return Err(ConfigError::bootstrap(
                "bootstrap.admin_password must not be empty",
            ));
        }

        Ok(())
    }
}
