// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: unreadable config or state files, recoverable problems
//! - `info`: startup and shutdown
//! - `debug`: notification lifecycle (enqueue, expire, dismiss)
//! - `trace`: field message timers
//!
//! # Filter Resolution
//!
//! 1. `--log-level` on the command line
//! 2. `RUST_LOG`
//! 3. `[logging] level` in `settings.toml`
//! 4. [`DEFAULT_LOG_LEVEL`](crate::config::DEFAULT_LOG_LEVEL)

use crate::config::DEFAULT_LOG_LEVEL;
use crate::error::{Error, Result};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Renderer crates that are chatty at `info`.
const QUIET_TARGETS: &[&str] = &["wgpu", "wgpu_core", "wgpu_hal", "naga", "iced_wgpu", "cosmic_text"];

/// Configuration for logging behavior.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Level given on the command line; beats everything else.
    pub cli_level: Option<String>,
    /// Level read from `settings.toml`; used when `RUST_LOG` is unset.
    pub config_level: Option<String>,
    pub with_target: bool,
    pub with_timestamps: bool,
}

impl LogConfig {
    #[must_use]
    pub fn with_cli_level(mut self, level: Option<String>) -> Self {
        self.cli_level = level;
        self
    }

    #[must_use]
    pub fn with_config_level(mut self, level: Option<String>) -> Self {
        self.config_level = level;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    /// The filter directive this configuration resolves to.
    #[must_use]
    pub fn directive(&self) -> String {
        let env = std::env::var("RUST_LOG").ok().filter(|value| !value.is_empty());
        resolve_directive(self.cli_level.as_deref(), env.as_deref(), self.config_level.as_deref())
    }
}

fn resolve_directive(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    if let Some(explicit) = cli.or(env) {
        return explicit.to_owned();
    }
    let level = config.unwrap_or(DEFAULT_LOG_LEVEL);
    let quiet = QUIET_TARGETS
        .iter()
        .map(|target| format!("{target}=warn"))
        .collect::<Vec<_>>()
        .join(",");
    format!("{level},{quiet}")
}

/// Installs the global subscriber, writing to stderr.
///
/// # Errors
///
/// Returns [`Error::Config`] for an invalid filter directive or when a
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let directive = config.directive();
    let filter = EnvFilter::try_new(&directive)
        .map_err(|err| Error::Config(format!("invalid log filter {directive:?}: {err}")))?;

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(config.with_target);

    let installed = if config.with_timestamps {
        tracing_subscriber::registry().with(filter).with(layer).try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time())
            .try_init()
    };
    installed.map_err(|err| Error::Config(format!("logging already initialized: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins_over_everything() {
        let directive = resolve_directive(Some("trace"), Some("warn"), Some("error"));
        assert_eq!(directive, "trace");
    }

    #[test]
    fn env_beats_config() {
        assert_eq!(resolve_directive(None, Some("grimoire=debug"), Some("error")), "grimoire=debug");
    }

    #[test]
    fn config_level_keeps_renderer_quiet() {
        let directive = resolve_directive(None, None, Some("debug"));
        assert!(directive.starts_with("debug,"));
        assert!(directive.contains("wgpu=warn"));
    }

    #[test]
    fn default_level_is_info() {
        assert!(resolve_directive(None, None, None).starts_with("info,"));
    }

    #[test]
    fn resolved_directives_parse() {
        let directive = resolve_directive(None, None, None);
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
