//! Scoped process-environment overrides for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

use taskflow::config::{
    CLOUDANT_PASSWORD, CLOUDANT_SYNC_DB, CLOUDANT_TIMEOUT_SECONDS, CLOUDANT_URL,
    CLOUDANT_USERNAME, FULL_ACCESS_TOKEN, MARVIN_API_BASE,
};

/// Every variable the application reads.
pub const APP_VARIABLES: [&str; 7] = [
    CLOUDANT_URL,
    CLOUDANT_SYNC_DB,
    CLOUDANT_USERNAME,
    CLOUDANT_PASSWORD,
    CLOUDANT_TIMEOUT_SECONDS,
    FULL_ACCESS_TOKEN,
    MARVIN_API_BASE,
];

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Holds the environment lock and restores overridden variables on drop.
pub struct EnvVarGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Clears every application variable, then applies `values`.
    pub fn isolated(values: &[(&'static str, &str)]) -> Self {
        let lock = env_lock();
        let previous = APP_VARIABLES
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();

        for name in APP_VARIABLES {
            apply(name, None);
        }
        for (name, value) in values {
            apply(name, Some(value));
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            apply(name, value.as_deref());
        }
    }
}

fn apply(name: &str, value: Option<&str>) {
    unsafe {
        // SAFETY: the global mutex serializes environment mutations in tests.
        match value {
            Some(new_value) => env::set_var(name, new_value),
            None => env::remove_var(name),
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
