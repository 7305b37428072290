
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub(crate) const VALID_SECRET: &str = "a-test-signing-secret-of-at-least-32-chars";

/// Temp config dir plus the two required settings, with every other BC_*
/// override cleared so the host environment cannot leak in
pub(crate) struct TestEnv {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "BC_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];

    for key in [
        "BC_SERVER_HOST",
        "BC_SERVER_PORT",
        "BC_DATABASE_MAX_CONNECTIONS",
        "BC_AUTH_TOKEN_TTL_SECS",
        "BC_AUTH_HASH_MEMORY_KIB",
        "BC_AUTH_HASH_ITERATIONS",
        "BC_AUTH_HASH_PARALLELISM",
        "BC_BOOTSTRAP_ADMIN_USERNAME",
        "BC_BOOTSTRAP_ADMIN_EMAIL",
        "BC_BOOTSTRAP_ADMIN_PASSWORD",
        "BC_LOG_LEVEL",
        "BC_LOG_COLORED",
        "BC_LOG_FILE",
    ] {
        guards.push(EnvGuard::remove(key));
    }

    guards.push(EnvGuard::set("BC_DATABASE_URL", "sqlite::memory:"));
    guards.push(EnvGuard::set("BC_AUTH_JWT_SECRET", VALID_SECRET));

    TestEnv {
        temp,
        _guards: guards,
    }
}
