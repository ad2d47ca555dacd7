//! Shared test utilities for integration tests
//!
//! Tests that read the process environment (config loading) go through
//! [`with_isolated_env`] so they never see the developer's real config.

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes environment variable access across all tests in this binary
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const GUARDED_VARS: &[&str] = &["HOME", "XDG_CONFIG_HOME", "TRAIL_ENV", "TRAIL_HISTORY__MAX_SIZE"];

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: GUARDED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.saved {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into a fresh temp dir and the
/// TRAIL_* overrides cleared. The temp dir is passed to `f`.
pub fn with_isolated_env<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let state = EnvState::capture();

    let home = temp_dir.path().join("home");
    let config_home = temp_dir.path().join("config");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);
    std::env::remove_var("TRAIL_ENV");
    std::env::remove_var("TRAIL_HISTORY__MAX_SIZE");

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(temp_dir.path())));
    state.restore();

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
