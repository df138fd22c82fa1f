//! Client configuration using Figment
//!
//! Configuration is loaded from:
//! 1. `decof.toml` (or any other TOML file)
//! 2. Environment variables prefixed with `DECOF_`, `__` separating levels
//!
//! ```toml
//! timeout_ms = 5000
//! log_level = "info"
//!
//! [connection]
//! type = "network"
//! host = "192.168.1.20"
//! ```
//!
//! `DECOF_CONNECTION__HOST=dlcpro.lab` overrides the host above.

use std::path::Path;
use std::time::Duration;

use decof_core::{DecofError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::connection::{Connection, NetworkConnection, COMMAND_LINE_PORT, MONITORING_LINE_PORT};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "decof.toml";

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Device connection; may also come from the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionConfig>,
    /// Response timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Device transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConnectionConfig {
    /// TCP command and monitoring lines
    Network {
        /// Host name or IP address
        host: String,
        /// Command line port
        #[serde(default = "default_command_port")]
        command_port: u16,
        /// Monitoring line port
        #[serde(default = "default_monitoring_port")]
        monitoring_port: u16,
    },
    /// Serial command line
    Serial {
        /// Port path, e.g. `/dev/ttyUSB0`
        port: String,
        /// Baud rate
        #[serde(default = "default_baud_rate")]
        baud_rate: u32,
    },
}

// Default value functions
fn default_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_command_port() -> u16 {
    COMMAND_LINE_PORT
}

fn default_monitoring_port() -> u16 {
    MONITORING_LINE_PORT
}

fn default_baud_rate() -> u32 {
    115_200
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connection: None,
            timeout_ms: default_timeout_ms(),
            log_level: default_log_level(),
        }
    }
}

impl ConnectionConfig {
    /// Network connection on the default ports.
    pub fn network(host: impl Into<String>) -> Self {
        ConnectionConfig::Network {
            host: host.into(),
            command_port: COMMAND_LINE_PORT,
            monitoring_port: MONITORING_LINE_PORT,
        }
    }

    /// Serial connection at the default baud rate.
    pub fn serial(port: impl Into<String>) -> Self {
        ConnectionConfig::Serial {
            port: port.into(),
            baud_rate: default_baud_rate(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `decof.toml` and environment variables.
    pub fn load() -> std::result::Result<Self, figment::Error> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment apply.
    pub fn load_from<P: AsRef<Path>>(path: P) -> std::result::Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("DECOF_").split("__"))
            .extract()
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(DecofError::Config(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }

        if self.timeout_ms == 0 {
            return Err(DecofError::Config("timeout_ms must be greater than 0".into()));
        }

        match &self.connection {
            Some(ConnectionConfig::Network { host, .. }) if host.trim().is_empty() => {
                Err(DecofError::Config("Network host must not be empty".into()))
            }
            Some(ConnectionConfig::Serial { port, baud_rate }) => {
                if port.trim().is_empty() {
                    return Err(DecofError::Config("Serial port must not be empty".into()));
                }
                if *baud_rate == 0 {
                    return Err(DecofError::Config("baud_rate must be greater than 0".into()));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Response timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build the configured connection.
    pub fn connect(&self) -> Result<Box<dyn Connection>> {
        match &self.connection {
            None => Err(DecofError::Config("No connection configured".into())),
            Some(ConnectionConfig::Network {
                host,
                command_port,
                monitoring_port,
            }) => Ok(Box::new(
                NetworkConnection::new(host.clone())
                    .with_ports(*command_port, *monitoring_port)
                    .with_timeout(self.timeout()),
            )),
            #[cfg(feature = "serial")]
            Some(ConnectionConfig::Serial { port, baud_rate }) => Ok(Box::new(
                crate::serial::SerialConnection::new(port.clone())
                    .with_baud_rate(*baud_rate)
                    .with_timeout(self.timeout()),
            )),
            #[cfg(not(feature = "serial"))]
            Some(ConnectionConfig::Serial { .. }) => Err(DecofError::Config(
                "Serial connections need the 'serial' feature".into(),
            )),
        }
    }
}
