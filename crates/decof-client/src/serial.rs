//! Serial port connections.
//!
//! DeCoF devices expose the command line on their USB/RS-232 port at
//! 115200 baud, 8N1. There is no monitoring line on serial transports, so
//! clients opened over [`SerialConnection`] cannot subscribe to parameters.
//!
//! # Feature Flag
//!
//! This module requires the `serial` feature (enabled by default).
//!
//! # Utilities
//!
//! - [`open_serial_async`]: Open a serial port with spawn_blocking
//! - [`drain_serial_buffer`]: Drain stale data from a serial port

use std::time::Duration;

use async_trait::async_trait;
use decof_core::{DecofError, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::connection::{Connection, DynStream, DEFAULT_TIMEOUT};

/// Baud rate of DeCoF serial command lines.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Time spent discarding stale bytes after opening the port.
const DRAIN_TIMEOUT_MS: u64 = 50;

/// Serial connection to a DeCoF device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConnection {
    port: String,
    baud_rate: u32,
    timeout: Duration,
}

impl SerialConnection {
    /// Connection on `port` (e.g. `/dev/ttyUSB0`, `COM3`) at 115200 baud.
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the baud rate.
    #[must_use]
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Override the I/O timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Serial port path.
    pub fn port(&self) -> &str {
        &self.port
    }
}

#[async_trait]
impl Connection for SerialConnection {
    async fn connect_command_line(&self) -> Result<DynStream> {
        let mut port = open_serial_async(&self.port, self.baud_rate).await?;
        let discarded = drain_serial_buffer(&mut port, DRAIN_TIMEOUT_MS).await;
        if discarded > 0 {
            tracing::debug!(port = %self.port, discarded, "Discarded stale serial bytes");
        }
        Ok(Box::new(port))
    }

    fn sends_greeting(&self) -> bool {
        false
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn describe(&self) -> String {
        format!("serial:{}@{}", self.port, self.baud_rate)
    }
}

/// Open a serial port asynchronously using spawn_blocking.
///
/// Standard settings are applied: 8N1, no flow control.
///
/// # Errors
///
/// Returns [`DecofError::DeviceNotFound`] if the port cannot be opened.
pub async fn open_serial_async(
    port_path: &str,
    baud_rate: u32,
) -> Result<tokio_serial::SerialStream> {
    use tokio::task::spawn_blocking;
    use tokio_serial::SerialPortBuilderExt;

    let port_path_owned = port_path.to_string();

    spawn_blocking(move || {
        tokio_serial::new(&port_path_owned, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| DecofError::DeviceNotFound(format!("{} ({})", port_path_owned, e)))
    })
    .await
    .map_err(|e| DecofError::Protocol(format!("spawn_blocking for serial port opening failed: {}", e)))?
}

/// Drain stale data from a serial port buffer.
///
/// Reads and discards until nothing arrives within `timeout_ms`. Returns the
/// number of bytes discarded.
pub async fn drain_serial_buffer<R: AsyncRead + Unpin>(port: &mut R, timeout_ms: u64) -> usize {
    let mut discard = [0u8; 256];
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    let mut total_discarded = 0usize;

    loop {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        if remaining.is_zero() {
            break;
        }

        match tokio::time::timeout(remaining, port.read(&mut discard)).await {
            Ok(Ok(0)) => break,
            Ok(Ok(n)) => total_discarded += n,
            Ok(Err(_)) => break,
            Err(_) => break,
        }
    }

    total_discarded
}
