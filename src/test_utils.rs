// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Tests that touch process-wide environment variables must hold
//! [`env_lock`] for their whole duration.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::tempdir;

use crate::app::paths::ENV_CONFIG_DIR;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Serializes access to environment variables across tests.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs `test` with the config directory pointed at a fresh temp dir.
pub fn with_temp_config_dir<F>(test: F)
where
    F: FnOnce(&Path),
{
    let _guard = env_lock();
    let temp_dir = tempdir().expect("failed to create temp dir");
    let previous = std::env::var(ENV_CONFIG_DIR).ok();
    std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

    test(temp_dir.path());

    if let Some(value) = previous {
        std::env::set_var(ENV_CONFIG_DIR, value);
    } else {
        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
