// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The component family is permissive about data: unknown kinds or anchors are
//! coerced, duplicate dismissals are ignored, empty messages clear. The
//! variants below therefore describe wiring mistakes and file problems only.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Notification lookup happened outside any `NotificationCenter::enter` scope.
    #[error("no active notification center: call NotificationCenter::enter() first")]
    NoActiveCenter,

    /// A `Toasts` handle outlived the center it was created from.
    #[error("notification center is no longer available")]
    CenterUnavailable,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("State Error: {0}")]
    State(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::value::Error> for Error {
    fn from(err: ciborium::value::Error) -> Self {
        Error::State(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn wiring_errors_explain_the_fix() {
        assert!(Error::NoActiveCenter.to_string().contains("enter()"));
        assert_ne!(Error::NoActiveCenter, Error::CenterUnavailable);
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("= nope");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
