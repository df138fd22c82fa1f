//! Error types for DeCoF communication.
//!
//! This module defines [`DecofError`], the single error type shared by the value
//! codec, the connections and the client. It is built with `thiserror` so that
//! I/O failures convert automatically with `?`.
//!
//! ## Error Hierarchy
//!
//! - **`Device`**: The device answered with `Error: <code> <message>`.
//! - **`Value`**: A response (or a literal typed by the user) could not be decoded
//!   as the expected DeCoF type.
//! - **`SetFailed`**: `param-set!` returned a non-zero status.
//! - **`Protocol`**: The byte stream did not follow the command/monitoring line grammar.
//! - **`DeviceNotFound`**, **`Timeout`**, **`NotConnected`**, **`Io`**: transport problems.
//! - **`MonitoringUnsupported`**: Subscriptions were requested on a connection without
//!   a monitoring line (e.g. serial).
//! - **`Config`**: Semantic configuration errors detected by validation.

use std::time::Duration;

use thiserror::Error;

use crate::value::ValueType;

/// Convenience alias for results using [`DecofError`].
pub type Result<T> = std::result::Result<T, DecofError>;

/// Primary error type for DeCoF clients.
///
/// # Error Categories
///
/// 1. **Device errors** - `Device`, `SetFailed`
///    - The request reached the device and was rejected
///    - Recovery: fix the request (name, value, user level) and retry
///
/// 2. **Decoding errors** - `Value`, `Protocol`
///    - Permanent for the given input; usually a type mismatch between the
///      binding and the firmware
///
/// 3. **Transport errors** - `DeviceNotFound`, `Timeout`, `NotConnected`, `Io`
///    - May be transient; reopen the connection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecofError {
    /// The device rejected a request.
    ///
    /// Raised for responses starting with `Error:`. The numeric code is kept when
    /// the device supplied one.
    #[error("Device error{}: {message}", .code.map(|c| format!(" {}", c)).unwrap_or_default())]
    Device {
        /// Numeric DeCoF error code, if present.
        code: Option<i64>,
        /// Error text reported by the device.
        message: String,
    },

    /// A value could not be decoded as the expected type.
    #[error("Invalid {expected} value: '{text}'")]
    Value {
        /// The type the caller asked for.
        expected: ValueType,
        /// The offending text.
        text: String,
    },

    /// Setting a parameter returned a non-zero status.
    #[error("Setting parameter '{name}' failed with status {status}")]
    SetFailed {
        /// Fully qualified parameter name.
        name: String,
        /// Status code returned by `param-set!`.
        status: i64,
    },

    /// The device sent something that does not follow the line protocol.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The device could not be reached at the given address.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// The device did not answer in time.
    #[error("Device timeout after {0:?}")]
    Timeout(Duration),

    /// A request was issued before `open()` or after `close()`.
    #[error("Not connected to a device")]
    NotConnected,

    /// Parameter subscriptions need a monitoring line.
    #[error("Current connection does not support parameter subscriptions")]
    MonitoringUnsupported,

    /// Standard I/O operation failed.
    ///
    /// `std::io::Error` is neither `Clone` nor `PartialEq`, so only the kind and
    /// message are kept.
    #[error("I/O error ({kind:?}): {message}")]
    Io {
        /// Error kind of the original I/O error.
        kind: std::io::ErrorKind,
        /// Display text of the original I/O error.
        message: String,
    },

    /// Configuration validation failed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for DecofError {
    fn from(err: std::io::Error) -> Self {
        DecofError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl DecofError {
    /// Shorthand for a [`DecofError::Value`].
    pub fn value(expected: ValueType, text: impl Into<String>) -> Self {
        DecofError::Value {
            expected,
            text: text.into(),
        }
    }

    /// True for errors reported by the device itself.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, DecofError::Device { .. } | DecofError::SetFailed { .. })
    }

    /// True for errors that leave the connection unusable.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DecofError::DeviceNotFound(_)
                | DecofError::Timeout(_)
                | DecofError::NotConnected
                | DecofError::Io { .. }
        )
    }
}

/// Recognise a device error response.
///
/// Device errors look like `Error: -12 parameter not found` (the code is optional).
/// Matching on the `Error:` prefix is case-insensitive.
pub fn parse_error(response: &str) -> Option<DecofError> {
    let trimmed = response.trim();
    let prefix = trimmed.get(..6)?;
    if !prefix.eq_ignore_ascii_case("error:") {
        return None;
    }

    let rest = trimmed[6..].trim();
    let (code, message) = match rest.split_once(char::is_whitespace) {
        Some((first, tail)) => match first.parse::<i64>() {
            Ok(code) => (Some(code), tail.trim().to_string()),
            Err(_) => (None, rest.to_string()),
        },
        None => match rest.parse::<i64>() {
            Ok(code) => (Some(code), String::new()),
            Err(_) => (None, rest.to_string()),
        },
    };

    Some(DecofError::Device { code, message })
}
