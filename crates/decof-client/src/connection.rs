//! Device connections.
//!
//! A [`Connection`] knows how to open the byte streams of a device: the
//! command line (request/response) and, for network devices, the monitoring
//! line (parameter change notifications). Framing happens in the client, so a
//! connection only hands out raw streams.
//!
//! # Types
//!
//! - [`DeviceStream`]: Trait alias combining AsyncRead + AsyncWrite
//! - [`DynStream`]: Type-erased boxed stream
//! - [`NetworkConnection`]: TCP, command line on port 1998, monitoring line on 1999
//! - [`StreamConnection`]: Pre-opened streams (in-memory devices, custom transports)
//! - `SerialConnection`: see [`crate::serial`]

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use decof_core::{DecofError, Result};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

/// Default command line port of DeCoF network devices.
pub const COMMAND_LINE_PORT: u16 = 1998;

/// Default monitoring line port of DeCoF network devices.
pub const MONITORING_LINE_PORT: u16 = 1999;

/// Default I/O timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Trait alias for async device I/O.
///
/// Any type implementing `AsyncRead + AsyncWrite + Unpin + Send` can be used
/// as a device stream. This includes:
/// - `tokio::net::TcpStream` (network devices)
/// - `tokio_serial::SerialStream` (serial devices)
/// - `tokio::io::DuplexStream` (testing)
pub trait DeviceStream: AsyncRead + AsyncWrite + Unpin + Send {}

// Blanket implementation for all types meeting the requirements
impl<T: AsyncRead + AsyncWrite + Unpin + Send> DeviceStream for T {}

/// Type-erased boxed device stream.
pub type DynStream = Box<dyn DeviceStream>;

/// Transport to a DeCoF device.
#[async_trait]
pub trait Connection: Send + Sync + 'static {
    /// Open the command line stream.
    async fn connect_command_line(&self) -> Result<DynStream>;

    /// Open the monitoring line stream, if the transport has one.
    async fn connect_monitoring_line(&self) -> Result<Option<DynStream>> {
        Ok(None)
    }

    /// Whether parameter subscriptions are possible on this transport.
    fn monitoring_line_supported(&self) -> bool {
        false
    }

    /// Whether the device greets with a banner and prompt right after connecting.
    ///
    /// Serial lines are already open, so the client has to ask for a prompt.
    fn sends_greeting(&self) -> bool {
        true
    }

    /// Timeout applied to every read of a response.
    fn timeout(&self) -> Duration;

    /// Human-readable address used in logs and errors.
    fn describe(&self) -> String;
}

// =============================================================================
// NetworkConnection
// =============================================================================

/// TCP connection to a DeCoF device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConnection {
    host: String,
    command_port: u16,
    monitoring_port: u16,
    timeout: Duration,
}

impl NetworkConnection {
    /// Connection to `host` on the default ports.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            command_port: COMMAND_LINE_PORT,
            monitoring_port: MONITORING_LINE_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the command and monitoring line ports.
    #[must_use]
    pub fn with_ports(mut self, command_port: u16, monitoring_port: u16) -> Self {
        self.command_port = command_port;
        self.monitoring_port = monitoring_port;
        self
    }

    /// Override the I/O timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Host name or IP address of the device.
    pub fn host(&self) -> &str {
        &self.host
    }

    async fn connect(&self, port: u16) -> Result<DynStream> {
        let attempt = TcpStream::connect((self.host.as_str(), port));
        match tokio::time::timeout(self.timeout, attempt).await {
            Err(_) => Err(DecofError::Timeout(self.timeout)),
            Ok(Err(e)) => Err(DecofError::DeviceNotFound(format!(
                "{}:{} ({})",
                self.host, port, e
            ))),
            Ok(Ok(stream)) => {
                stream.set_nodelay(true)?;
                tracing::debug!(host = %self.host, port, "TCP connection established");
                Ok(Box::new(stream))
            }
        }
    }
}

#[async_trait]
impl Connection for NetworkConnection {
    async fn connect_command_line(&self) -> Result<DynStream> {
        self.connect(self.command_port).await
    }

    async fn connect_monitoring_line(&self) -> Result<Option<DynStream>> {
        self.connect(self.monitoring_port).await.map(Some)
    }

    fn monitoring_line_supported(&self) -> bool {
        true
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn describe(&self) -> String {
        format!("{}:{}", self.host, self.command_port)
    }
}

// =============================================================================
// StreamConnection
// =============================================================================

/// Connection over streams that are already open.
///
/// Each stream can be handed out once; reopening a client built on a
/// `StreamConnection` fails with [`DecofError::DeviceNotFound`].
pub struct StreamConnection {
    command_line: Mutex<Option<DynStream>>,
    monitoring_line: Mutex<Option<DynStream>>,
    has_monitoring_line: bool,
    timeout: Duration,
}

impl StreamConnection {
    /// Connection with a command line only.
    pub fn new(command_line: impl DeviceStream + 'static) -> Self {
        Self {
            command_line: Mutex::new(Some(Box::new(command_line))),
            monitoring_line: Mutex::new(None),
            has_monitoring_line: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Add a monitoring line stream.
    #[must_use]
    pub fn with_monitoring_line(mut self, monitoring_line: impl DeviceStream + 'static) -> Self {
        self.monitoring_line = Mutex::new(Some(Box::new(monitoring_line)));
        self.has_monitoring_line = true;
        self
    }

    /// Override the I/O timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for StreamConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamConnection")
            .field("has_monitoring_line", &self.has_monitoring_line)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Connection for StreamConnection {
    async fn connect_command_line(&self) -> Result<DynStream> {
        self.command_line
            .lock()
            .take()
            .ok_or_else(|| DecofError::DeviceNotFound("command line stream already used".into()))
    }

    async fn connect_monitoring_line(&self) -> Result<Option<DynStream>> {
        if !self.has_monitoring_line {
            return Ok(None);
        }
        self.monitoring_line
            .lock()
            .take()
            .map(Some)
            .ok_or_else(|| DecofError::DeviceNotFound("monitoring line stream already used".into()))
    }

    fn monitoring_line_supported(&self) -> bool {
        self.has_monitoring_line
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn describe(&self) -> String {
        "stream".to_string()
    }
}
