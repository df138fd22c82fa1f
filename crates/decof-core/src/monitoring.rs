//! Monitoring line message parsing.
//!
//! Once a parameter is registered with `(add 'name)`, the device pushes every
//! change on the monitoring line as one message per line:
//!
//! ```text
//! ("2019-02-12T07:24:22.130Z" 'laser1:dl:cc:current-act 89.31)
//! ("2019-02-12T07:24:22.180Z" 'laser1:dl:cc:current-act Error: -11 not readable)
//! ```
//!
//! The timestamp quotes and the name quote are optional. The value is kept as
//! raw text because only the subscriber knows which type to decode it as.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{parse_error, DecofError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Raw payload of a monitoring message.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitoringValue {
    /// Undecoded value text
    Text(String),
    /// The device reported an error for this parameter
    Error(DecofError),
}

/// One message received on the monitoring line.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringUpdate {
    /// Device timestamp of the change
    pub timestamp: DateTime<Utc>,
    /// Fully qualified parameter name
    pub name: String,
    /// Value text or device error
    pub value: MonitoringValue,
}

impl MonitoringUpdate {
    /// Parse a monitoring line message.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| malformed(trimmed))?;

        let (timestamp_text, rest) = inner.trim().split_once(' ').ok_or_else(|| malformed(trimmed))?;
        let (name_text, value_text) = match rest.trim_start().split_once(' ') {
            Some((name, value)) => (name, value.trim()),
            None => (rest.trim(), ""),
        };

        let timestamp = parse_timestamp(timestamp_text.trim_matches('"'))?;
        let name = name_text.trim_start_matches('\'').to_string();
        if name.is_empty() {
            return Err(malformed(trimmed));
        }

        let value = match parse_error(value_text) {
            Some(err) => MonitoringValue::Error(err),
            None => MonitoringValue::Text(value_text.to_string()),
        };

        Ok(Self {
            timestamp,
            name,
            value,
        })
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DecofError::Protocol(format!("Invalid timestamp '{}': {}", text, e)))
}

fn malformed(line: &str) -> DecofError {
    DecofError::Protocol(format!("Malformed monitoring line message: '{}'", line))
}

/// Request to start monitoring a parameter.
#[must_use]
pub fn add_request(name: &str) -> String {
    format!("(add '{})\r\n", name)
}

/// Request to stop monitoring a parameter.
#[must_use]
pub fn remove_request(name: &str) -> String {
    format!("(remove '{})\r\n", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_quoted_message() {
        let update =
            MonitoringUpdate::parse("(\"2019-02-12T07:24:22.130Z\" 'laser1:dl:cc:current-act 89.31)\r\n")
                .unwrap();
        assert_eq!(update.name, "laser1:dl:cc:current-act");
        assert_eq!(update.value, MonitoringValue::Text("89.31".into()));
        assert_eq!(update.timestamp.year(), 2019);
        assert_eq!(update.timestamp.second(), 22);
        assert_eq!(update.timestamp.nanosecond(), 130_000_000);
    }

    #[test]
    fn parses_unquoted_message_with_string_value() {
        let update =
            MonitoringUpdate::parse("(2019-02-12T07:24:22.130Z system-label \"lab 3 laser\")").unwrap();
        assert_eq!(update.name, "system-label");
        assert_eq!(update.value, MonitoringValue::Text("\"lab 3 laser\"".into()));
    }

    #[test]
    fn parses_error_message() {
        let update = MonitoringUpdate::parse(
            "(\"2019-02-12T07:24:22.180Z\" 'laser1:dl:cc:current-act Error: -11 not readable)",
        )
        .unwrap();
        match update.value {
            MonitoringValue::Error(DecofError::Device { code, message }) => {
                assert_eq!(code, Some(-11));
                assert_eq!(message, "not readable");
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_messages() {
        assert!(MonitoringUpdate::parse("hello").is_err());
        assert!(MonitoringUpdate::parse("(2019-02-12 x 1)").is_err());
        assert!(MonitoringUpdate::parse("()").is_err());
    }

    #[test]
    fn builds_requests() {
        assert_eq!(add_request("emission"), "(add 'emission)\r\n");
        assert_eq!(remove_request("emission"), "(remove 'emission)\r\n");
    }
}
