//! Scoped environment overrides for integration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

use enqueuer::enqueue::domain::{
    AUTH_TOKEN_FIELD_VAR, FIELD_NAMING_MODE_VAR, OBJECT_ID_FIELD_VAR, REGION_VAR, TOPIC_ARN_VAR,
};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Every variable the handler settings read.
pub const SETTINGS_VARS: [&str; 5] = [
    TOPIC_ARN_VAR,
    REGION_VAR,
    AUTH_TOKEN_FIELD_VAR,
    OBJECT_ID_FIELD_VAR,
    FIELD_NAMING_MODE_VAR,
];

/// Guard that replaces the handler's environment for its lifetime.
///
/// Variables not listed in the override are removed, so each test starts
/// from a known environment.
pub struct EnvVarGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `values` to the settings variables and clears the rest.
    pub fn settings(values: &[(&'static str, &str)]) -> Self {
        let lock = env_lock();
        let previous = SETTINGS_VARS
            .iter()
            .map(|key| (*key, env::var(key).ok()))
            .collect();

        for key in SETTINGS_VARS {
            let value = values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| *value);
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(key, previous),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
