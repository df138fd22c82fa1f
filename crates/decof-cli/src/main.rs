//! `decof`: command-line access to DeCoF laser controllers.
//!
//! Device commands talk to the command line (and, for `monitor`, the
//! monitoring line) of a TOPTICA controller:
//!
//! ```bash
//! decof --host 192.168.1.20 get laser1:dl:cc:current-act -t real
//! decof --host 192.168.1.20 set laser1:dl:cc:current-set 95.5
//! decof --host 192.168.1.20 exec system-messages:show-all --output
//! decof --host 192.168.1.20 monitor emission -t boolean --count 5
//! decof --serial /dev/ttyUSB0 change-ul maintenance --password secret
//! decof --host 192.168.1.20 info
//! ```
//!
//! Two offline helpers need no device:
//!
//! ```bash
//! decof country --by cca3 DEU
//! decof title-columns scan.csv -o scan_titled.csv
//! ```

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countries::LookupField;
use decof_client::config::DEFAULT_CONFIG_FILE;
use decof_client::{AccessLevel, ClientConfig, ConnectionConfig, ValueType};

use crate::logging::{OutputFormat, TracingConfig};

#[derive(Debug, Parser)]
#[command(name = "decof")]
#[command(about = "Talk to DeCoF laser controllers", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Device host name or IP address
    #[arg(long, global = true, conflicts_with = "serial")]
    host: Option<String>,

    /// Serial port of the device
    #[arg(long, global = true)]
    serial: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Compact)]
    log_format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a parameter
    Get {
        /// Fully qualified parameter name
        name: String,
        /// Value type; repeat for tuple parameters
        #[arg(short = 't', long = "type", required = true)]
        types: Vec<ValueType>,
    },

    /// Write a parameter
    Set {
        /// Fully qualified parameter name
        name: String,
        /// Literal values (`#t`, `42`, `1.5`, `"text"`, `&base64`); several make a tuple
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Execute a command
    Exec {
        /// Fully qualified command name
        name: String,
        /// Literal arguments
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// File sent as the command's input stream
        #[arg(long, conflicts_with_all = ["output", "returns"])]
        input: Option<PathBuf>,
        /// Print the command's text output
        #[arg(long)]
        output: bool,
        /// Type of the return value
        #[arg(long)]
        returns: Option<ValueType>,
    },

    /// Print updates of a parameter from the monitoring line
    Monitor {
        /// Fully qualified parameter name
        name: String,
        /// Value type
        #[arg(short = 't', long = "type")]
        value_type: ValueType,
        /// Stop after this many updates
        #[arg(long)]
        count: Option<usize>,
    },

    /// Change the user level of the session
    ChangeUl {
        /// Level name or number (internal=0 .. readonly=4)
        level: AccessLevel,
        /// Password for the level
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Print identification of a DLC pro
    Info,

    /// Look up a country by name or code
    Country {
        /// Name or code to look up
        symbol: String,
        /// Key space of the symbol
        #[arg(long, default_value = "name")]
        by: LookupField,
    },

    /// Title-case the column names of a CSV or Arrow IPC file
    TitleColumns {
        /// Input file; `.arrow`, `.ipc` and `.feather` are read as Arrow IPC
        input: PathBuf,
        /// Output file; CSV defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// False for the offline helpers, which never read the configuration.
    fn needs_device(&self) -> bool {
        !matches!(self, Command::Country { .. } | Command::TitleColumns { .. })
    }
}

impl Cli {
    /// `--log-level`, or the configuration default.
    fn offline_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| ClientConfig::default().log_level)
    }

    /// Configuration file plus command-line overrides.
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load_from(&self.config)
            .with_context(|| format!("Failed to load configuration from {}", self.config.display()))?;
        if let Some(host) = &self.host {
            config.connection = Some(ConnectionConfig::network(host.clone()));
        }
        if let Some(port) = &self.serial {
            config.connection = Some(ConnectionConfig::serial(port.clone()));
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.command.needs_device() {
        init_tracing(&cli.offline_log_level(), cli.log_format)?;
        return commands::run_offline(cli.command);
    }

    let config = cli.client_config()?;
    init_tracing(&config.log_level, cli.log_format)?;
    commands::run_on_device(cli.command, &config).await
}

fn init_tracing(level: &str, format: OutputFormat) -> Result<()> {
    let tracing_config = TracingConfig::from_level(level)
        .map_err(anyhow::Error::msg)?
        .with_format(format);
    logging::init(tracing_config).map_err(anyhow::Error::msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_device_commands() {
        let cli = Cli::try_parse_from([
            "decof", "--host", "dlcpro.lab", "get", "laser1:scan:range", "-t", "real", "-t", "string",
        ])
        .unwrap();
        assert_eq!(cli.host.as_deref(), Some("dlcpro.lab"));
        match cli.command {
            Command::Get { name, types } => {
                assert_eq!(name, "laser1:scan:range");
                assert_eq!(types, [ValueType::Real, ValueType::String]);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["decof", "set", "laser1:dl:cc:current-set", "-1.5"]).unwrap();
        assert!(matches!(cli.command, Command::Set { values, .. } if values == ["-1.5"]));

        let cli = Cli::try_parse_from(["decof", "change-ul", "maintenance", "--password", "pw"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::ChangeUl { level: AccessLevel::Maintenance, .. }
        ));
    }

    #[test]
    fn host_and_serial_conflict() {
        assert!(Cli::try_parse_from(["decof", "--host", "a", "--serial", "b", "info"]).is_err());
        assert!(Cli::try_parse_from(["decof", "get", "uptime"]).is_err());
    }

    #[test]
    fn country_lookup_defaults_to_name() {
        let cli = Cli::try_parse_from(["decof", "country", "Germany"]).unwrap();
        assert!(matches!(cli.command, Command::Country { by: LookupField::Name, .. }));
        let cli = Cli::try_parse_from(["decof", "country", "--by", "CIOC", "GER"]).unwrap();
        assert!(matches!(cli.command, Command::Country { by: LookupField::Cioc, .. }));
    }

    #[test]
    fn overrides_apply_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = Cli::try_parse_from([
            "decof",
            "--config",
            path.to_str().unwrap(),
            "--serial",
            "/dev/ttyUSB0",
            "--log-level",
            "debug",
            "info",
        ])
        .unwrap();
        let config = cli.client_config().unwrap();
        assert_eq!(config.connection, Some(ConnectionConfig::serial("/dev/ttyUSB0")));
        assert_eq!(config.log_level, "debug");

        let cli = Cli::try_parse_from([
            "decof",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "loud",
            "info",
        ])
        .unwrap();
        assert!(cli.client_config().is_err());
    }

    #[test]
    fn offline_commands_ignore_a_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decof.toml");
        std::fs::write(&path, "log_level = \"loud\"\n[connection\n").unwrap();

        let config = path.to_str().unwrap();
        let cli = Cli::try_parse_from(["decof", "--config", config, "country", "Germany"]).unwrap();
        assert!(!cli.command.needs_device());
        assert!(cli.client_config().is_err());
        assert_eq!(cli.offline_log_level(), "info");
        commands::run_offline(cli.command).unwrap();

        let cli = Cli::try_parse_from([
            "decof",
            "--config",
            config,
            "--log-level",
            "warn",
            "title-columns",
            "scan.csv",
        ])
        .unwrap();
        assert!(!cli.command.needs_device());
        assert_eq!(cli.offline_log_level(), "warn");

        let cli = Cli::try_parse_from(["decof", "--config", config, "info"]).unwrap();
        assert!(cli.command.needs_device());
        assert!(cli.client_config().is_err());
    }
}
