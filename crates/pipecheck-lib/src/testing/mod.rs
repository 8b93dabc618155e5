//! Shared test helpers
//!
//! Tests that mutate the process environment run under
//! `#[serial_test::serial]` and hold an [`EnvGuard`], which starts them from
//! a clean slate and removes whatever they set.

/// Variables read by config loading and color detection
pub const MANAGED_ENV_VARS: &[&str] = &[
    "NO_COLOR",
    "FORCE_COLOR",
    "CLICOLOR",
    "CI",
    "RUST_LOG",
    "PIPECHECK_HOST",
    "PIPECHECK_PORT",
    "PIPECHECK_ALLOWED_ORIGINS",
    "PIPECHECK_MAX_BODY_BYTES",
    "PIPECHECK_DANGLING_EDGES",
    "PIPECHECK_LOG_LEVEL",
    "PIPECHECK_LOG_FORMAT",
    "PIPECHECK_LOG_OUTPUT",
    "PIPECHECK_COLOR",
];

/// Clears the managed variables on creation and drop
pub struct EnvGuard {
    _private: (),
}

impl EnvGuard {
    /// Set a variable until the guard drops
    pub fn set(&self, key: &str, value: &str) {
        // SAFETY: callers are #[serial], so no other test reads the environment concurrently
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        remove_managed_vars();
    }
}

/// Start a serial test from an environment without any managed variable
pub fn clean_test_env() -> EnvGuard {
    remove_managed_vars();
    EnvGuard { _private: () }
}

fn remove_managed_vars() {
    // SAFETY: see EnvGuard::set
    unsafe {
        for key in MANAGED_ENV_VARS {
            std::env::remove_var(key);
        }
    }
}
