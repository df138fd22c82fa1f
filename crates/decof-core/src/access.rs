//! User levels of the DeCoF command and monitoring lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DecofError, Result};
use crate::value::ValueType;

/// Access level ("user level") of a DeCoF session.
///
/// Lower numbers grant more rights. A fresh session starts at [`AccessLevel::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Factory internal
    Internal = 0,
    /// Service technicians
    Service = 1,
    /// Maintenance
    Maintenance = 2,
    /// Regular operation
    Normal = 3,
    /// Read-only access
    Readonly = 4,
}

impl AccessLevel {
    /// Numeric level as used on the wire.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Levels that may be entered without a password.
    #[must_use]
    pub fn allows_empty_password(self) -> bool {
        matches!(self, AccessLevel::Normal | AccessLevel::Readonly)
    }
}

impl TryFrom<i64> for AccessLevel {
    type Error = DecofError;

    fn try_from(level: i64) -> Result<Self> {
        match level {
            0 => Ok(AccessLevel::Internal),
            1 => Ok(AccessLevel::Service),
            2 => Ok(AccessLevel::Maintenance),
            3 => Ok(AccessLevel::Normal),
            4 => Ok(AccessLevel::Readonly),
            other => Err(DecofError::value(ValueType::Integer, other.to_string())),
        }
    }
}

impl FromStr for AccessLevel {
    type Err = DecofError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(level) = s.trim().parse::<i64>() {
            return AccessLevel::try_from(level);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(AccessLevel::Internal),
            "service" => Ok(AccessLevel::Service),
            "maintenance" => Ok(AccessLevel::Maintenance),
            "normal" => Ok(AccessLevel::Normal),
            "readonly" => Ok(AccessLevel::Readonly),
            _ => Err(DecofError::value(ValueType::Integer, s)),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccessLevel::Internal => "internal",
            AccessLevel::Service => "service",
            AccessLevel::Maintenance => "maintenance",
            AccessLevel::Normal => "normal",
            AccessLevel::Readonly => "readonly",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_wire_levels() {
        assert_eq!(AccessLevel::try_from(0).unwrap(), AccessLevel::Internal);
        assert_eq!(AccessLevel::try_from(3).unwrap(), AccessLevel::Normal);
        assert_eq!(AccessLevel::try_from(4).unwrap(), AccessLevel::Readonly);
        assert!(AccessLevel::try_from(5).is_err());
        assert!(AccessLevel::try_from(-1).is_err());
    }

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("service".parse::<AccessLevel>().unwrap(), AccessLevel::Service);
        assert_eq!("Maintenance".parse::<AccessLevel>().unwrap(), AccessLevel::Maintenance);
        assert_eq!("2".parse::<AccessLevel>().unwrap(), AccessLevel::Maintenance);
        assert!("root".parse::<AccessLevel>().is_err());
    }

    #[test]
    fn empty_password_levels() {
        assert!(AccessLevel::Normal.allows_empty_password());
        assert!(AccessLevel::Readonly.allows_empty_password());
        assert!(!AccessLevel::Service.allows_empty_password());
        assert!(AccessLevel::Internal < AccessLevel::Normal);
        assert_eq!(AccessLevel::Maintenance.as_i64(), 2);
    }
}
