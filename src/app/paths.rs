// SPDX-License-Identifier: MPL-2.0
//! Where Grimoire keeps its files.
//!
//! Both directories resolve in the same order:
//! 1. an explicit override passed to a `*_with_override` function (tests)
//! 2. the `--config-dir` / `--data-dir` CLI flags, see [`init_cli_overrides`]
//! 3. the `GRIMOIRE_CONFIG_DIR` / `GRIMOIRE_DATA_DIR` environment variables
//! 4. the platform directory from `dirs`, with [`APP_NAME`] appended

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::warn;

/// Directory name appended to the platform locations.
pub const APP_NAME: &str = "Grimoire";

pub const ENV_DATA_DIR: &str = "GRIMOIRE_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "GRIMOIRE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the directory flags given on the command line.
///
/// Only the first call counts; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    if CLI_DATA_DIR.set(data_dir).is_err() || CLI_CONFIG_DIR.set(config_dir).is_err() {
        warn!("CLI directory overrides were already initialized");
    }
}

fn env_dir(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_name: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(|| cli.get().cloned().flatten())
        .or_else(|| env_dir(env_name))
        .or_else(|| platform().map(|dir| dir.join(APP_NAME)))
}

/// Directory holding `state.cbor`.
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

#[must_use]
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Directory holding `settings.toml`.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}
