// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - default anchor and duration of notifications
//! - `[fields]` - hide delay of transient field messages
//! - `[logging]` - tracing filter used when `RUST_LOG` is unset
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `GRIMOIRE_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use grimoire::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.toasts.duration_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::fields::MessageDelay;
use crate::ui::notifications::{Anchor, CenterDefaults};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Notification defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Corner used when `enqueue` is called without an anchor.
    #[serde(
        default = "default_toast_anchor",
        deserialize_with = "deserialize_anchor"
    )]
    pub anchor: Anchor,

    /// Lifetime in milliseconds; `0` keeps toasts until dismissed.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_TOAST_ANCHOR,
            duration_ms: default_toast_duration_ms(),
        }
    }
}

impl ToastConfig {
    /// Defaults for a [`NotificationCenter`](crate::ui::notifications::NotificationCenter).
    #[must_use]
    pub fn center_defaults(&self) -> CenterDefaults {
        let millis = self
            .duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);
        CenterDefaults {
            anchor: self.anchor,
            duration: Duration::from_millis(millis),
        }
    }
}

/// Form field settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldsConfig {
    /// How long validation messages stay visible, in milliseconds.
    #[serde(
        default = "default_message_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_delay_ms: Option<u32>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            message_delay_ms: default_message_delay_ms(),
        }
    }
}

impl FieldsConfig {
    #[must_use]
    pub fn message_delay(&self) -> MessageDelay {
        self.message_delay_ms
            .map(MessageDelay::new)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive such as `info` or `grimoire=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,

    #[serde(default)]
    pub fields: FieldsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_anchor() -> Anchor {
    DEFAULT_TOAST_ANCHOR
}

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_message_delay_ms() -> Option<u32> {
    Some(DEFAULT_FIELD_MESSAGE_DELAY_MS)
}

fn deserialize_anchor<'de, D>(deserializer: D) -> std::result::Result<Anchor, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    Anchor::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid anchor: {raw}")))
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns `(config, warning)`. A missing file silently yields defaults; an
/// unreadable one yields defaults plus a warning describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to default config");
            (
                Config::default(),
                Some(format!("Could not read {}: {err}", path.display())),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.toasts.anchor, Anchor::TopLeft);
        assert_eq!(config.toasts.duration_ms, Some(3500));
        assert_eq!(config.fields.message_delay_ms, Some(3000));
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn save_and_load_preserves_settings() {
        let config = Config {
            toasts: ToastConfig {
                anchor: Anchor::BottomRight,
                duration_ms: Some(0),
            },
            fields: FieldsConfig {
                message_delay_ms: Some(1500),
            },
            logging: LoggingConfig {
                level: Some("debug".into()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn sections_may_be_omitted() {
        let config: Config =
            toml::from_str("[toasts]\nanchor = \"bottom_left\"\n").expect("valid config");
        assert_eq!(config.toasts.anchor, Anchor::BottomLeft);
        assert_eq!(config.toasts.duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
        assert_eq!(config.fields, FieldsConfig::default());
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        let result = toml::from_str::<Config>("[toasts]\nanchor = \"middle\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is not = [valid").expect("write");

        let err = load_from_path(&path).expect_err("invalid toml must fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_with_override_round_trips() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("cfg");
        let mut config = Config::default();
        config.toasts.anchor = Anchor::TopRight;

        save_with_override(&config, Some(base.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.toasts.anchor, Anchor::TopRight);
    }

    #[test]
    fn center_defaults_clamp_duration() {
        let toasts = ToastConfig {
            anchor: Anchor::TopRight,
            duration_ms: Some(u64::MAX),
        };
        let defaults = toasts.center_defaults();
        assert_eq!(defaults.anchor, Anchor::TopRight);
        assert_eq!(
            defaults.duration,
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn message_delay_is_clamped() {
        let fields = FieldsConfig {
            message_delay_ms: Some(1),
        };
        assert_eq!(fields.message_delay().value(), MIN_FIELD_MESSAGE_DELAY_MS);
    }
}
