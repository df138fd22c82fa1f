//! Async DeCoF client.
//!
//! [`Client`] owns the command line of a device and, when the transport has
//! one, the monitoring line. Requests on the command line are serialized
//! through an async mutex. The monitoring line is served by two background
//! tasks: a reader that dispatches change messages to subscribers and a
//! writer that drains the request queue (`add`, `remove`, `change-ul`).
//!
//! # Example
//!
//! ```rust,ignore
//! use decof_client::{Client, NetworkConnection};
//!
//! let client = Client::new(NetworkConnection::new("192.168.1.20"));
//! client.open().await?;
//! let uptime: i64 = client.get("uptime").await?;
//! client.set("laser1:dl:cc:current-set", 90.0).await?;
//! client.close().await?;
//! ```

use std::fmt;
use std::sync::Arc;

use decof_core::{
    parse_error, split_list, AccessLevel, DecofError, DecofType, MonitoringUpdate, Result,
    StreamData, StreamInput, Value, ValueType,
};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::command_line::CommandLine;
use crate::connection::Connection;
use crate::subscription::{Subscription, SubscriptionRegistry};

struct MonitorTasks {
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

struct Inner {
    connection: Box<dyn Connection>,
    command_line: tokio::sync::Mutex<Option<CommandLine>>,
    monitor: parking_lot::Mutex<Option<MonitorTasks>>,
    registry: Arc<SubscriptionRegistry>,
}

/// Async client for a DeCoF device.
///
/// Cloning is cheap; clones share the connection.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

impl Client {
    /// Client for `connection`. Nothing is opened until [`Client::open`].
    pub fn new(connection: impl Connection) -> Self {
        Self::from_boxed(Box::new(connection))
    }

    /// Client for an already boxed connection.
    pub fn from_boxed(connection: Box<dyn Connection>) -> Self {
        Self {
            inner: Arc::new(Inner {
                connection,
                command_line: tokio::sync::Mutex::new(None),
                monitor: parking_lot::Mutex::new(None),
                registry: Arc::new(SubscriptionRegistry::default()),
            }),
        }
    }

    /// The underlying connection.
    pub fn connection(&self) -> &dyn Connection {
        self.inner.connection.as_ref()
    }

    /// Whether the command line is open.
    pub async fn is_open(&self) -> bool {
        self.inner.command_line.lock().await.is_some()
    }

    /// Open the command line and, if supported, the monitoring line.
    ///
    /// Opening an open client does nothing.
    #[instrument(skip(self), fields(device = %self.inner.connection.describe()), err)]
    pub async fn open(&self) -> Result<()> {
        let mut guard = self.inner.command_line.lock().await;
        if guard.is_some() {
            return Ok(());
        }

        // A command line dropped after a transport error leaves its monitoring
        // line behind; subscriptions on it end with the old session.
        self.stop_monitoring();

        let connection = &self.inner.connection;
        let stream = connection.connect_command_line().await?;
        let line = CommandLine::open(stream, connection.timeout(), connection.sends_greeting()).await?;

        if connection.monitoring_line_supported() {
            if let Some(stream) = connection.connect_monitoring_line().await? {
                let (reader, writer) = tokio::io::split(stream);
                let (requests_tx, requests_rx) = mpsc::unbounded_channel();
                let generation = self.inner.registry.attach(requests_tx);
                let registry = self.inner.registry.clone();
                let tasks = MonitorTasks {
                    reader: tokio::spawn(run_monitor_reader(reader, registry, generation)),
                    writer: tokio::spawn(run_monitor_writer(writer, requests_rx)),
                };
                *self.inner.monitor.lock() = Some(tasks);
            }
        }

        *guard = Some(line);
        info!("Connected to DeCoF device");
        Ok(())
    }

    /// Close both lines. Active subscriptions end.
    #[instrument(skip(self), fields(device = %self.inner.connection.describe()))]
    pub async fn close(&self) -> Result<()> {
        self.stop_monitoring();

        let line = self.inner.command_line.lock().await.take();
        if let Some(mut line) = line {
            line.shutdown().await;
            info!("Disconnected from DeCoF device");
        }
        Ok(())
    }

    fn stop_monitoring(&self) {
        self.inner.registry.detach();
        let tasks = self.inner.monitor.lock().take();
        if let Some(tasks) = tasks {
            tasks.reader.abort();
            tasks.writer.abort();
        }
    }

    async fn query(&self, request: String, input: Option<StreamInput<'_>>) -> Result<String> {
        let mut guard = self.inner.command_line.lock().await;
        let line = guard.as_mut().ok_or(DecofError::NotConnected)?;

        debug!(request = request.trim_end(), "DeCoF request");
        match line.query(&request, input.as_ref()).await {
            Ok(response) => {
                debug!(response = %response, "DeCoF response");
                Ok(response)
            }
            Err(err) => {
                if err.is_transport_error() {
                    // A partial response would desynchronize the prompt framing.
                    warn!(error = %err, "Command line failed, closing it");
                    *guard = None;
                }
                Err(err)
            }
        }
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Read a parameter.
    pub async fn get<T: DecofType>(&self, name: &str) -> Result<T> {
        let response = self.query(format!("(param-ref '{})\n", name), None).await?;
        T::decode(&response)
    }

    /// Read a parameter with a type chosen at runtime.
    pub async fn get_value(&self, name: &str, value_type: ValueType) -> Result<Value> {
        let response = self.query(format!("(param-ref '{})\n", name), None).await?;
        if let Some(err) = parse_error(&response) {
            return Err(err);
        }
        Value::decode(&response, value_type)
    }

    /// Read a compound parameter whose value is a list such as `(1 "a" #t)`.
    pub async fn get_values(&self, name: &str, types: &[ValueType]) -> Result<Vec<Value>> {
        let response = self.query(format!("(param-ref '{})\n", name), None).await?;
        if let Some(err) = parse_error(&response) {
            return Err(err);
        }

        let items = split_list(&response)?;
        if items.len() != types.len() {
            return Err(DecofError::Protocol(format!(
                "Invalid type list {:?} for value '{}'",
                types, response
            )));
        }
        items
            .iter()
            .zip(types)
            .map(|(text, value_type)| Value::decode(text, *value_type))
            .collect()
    }

    /// Write a parameter.
    pub async fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let response = self
            .query(format!("(param-set! '{} {})\n", name, value.encode()), None)
            .await?;
        check_set_status(name, &response)
    }

    /// Write a compound parameter.
    pub async fn set_values(&self, name: &str, values: &[Value]) -> Result<()> {
        let encoded = match values {
            [single] => single.encode(),
            _ => decof_core::encode_list(values),
        };
        let response = self
            .query(format!("(param-set! '{} {})\n", name, encoded), None)
            .await?;
        check_set_status(name, &response)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    async fn exec_raw(&self, name: &str, args: &[Value], input: Option<StreamInput<'_>>) -> Result<String> {
        let mut request = format!("(exec '{}", name);
        for arg in args {
            request.push(' ');
            request.push_str(&arg.encode());
        }
        request.push_str(")\n");

        let response = self.query(request, input).await?;
        if let Some(err) = parse_error(&response) {
            return Err(err);
        }
        Ok(response)
    }

    /// Execute a command without result.
    pub async fn exec(&self, name: &str, args: &[Value]) -> Result<()> {
        self.exec_raw(name, args, None).await.map(|_| ())
    }

    /// Execute a command that reads an input stream.
    pub async fn exec_with_input(&self, name: &str, args: &[Value], input: StreamInput<'_>) -> Result<()> {
        self.exec_raw(name, args, Some(input)).await.map(|_| ())
    }

    /// Execute a command and decode its return value.
    pub async fn exec_returning<T: DecofType>(&self, name: &str, args: &[Value]) -> Result<T> {
        let response = self.exec_raw(name, args, None).await?;
        let (_, last) = split_response(&response);
        T::decode(last)
    }

    /// Execute a command and collect its output stream.
    pub async fn exec_output<S: StreamData>(&self, name: &str, args: &[Value]) -> Result<S> {
        let response = self.exec_raw(name, args, None).await?;
        let (output, _) = split_response(&response);
        S::decode_stream(&output)
    }

    /// Execute a command that produces an output stream and a return value.
    pub async fn exec_output_returning<S: StreamData, T: DecofType>(
        &self,
        name: &str,
        args: &[Value],
    ) -> Result<(S, T)> {
        let response = self.exec_raw(name, args, None).await?;
        let (output, last) = split_response(&response);
        Ok((S::decode_stream(&output)?, T::decode(last)?))
    }

    // =========================================================================
    // Sessions and monitoring
    // =========================================================================

    /// Change the user level of the session.
    ///
    /// Levels below [`AccessLevel::Normal`] need a password; without one the
    /// current level is returned unchanged. On success the monitoring line is
    /// switched to the same level.
    #[instrument(skip(self, password), err)]
    pub async fn change_ul(&self, level: AccessLevel, password: &str) -> Result<AccessLevel> {
        if password.is_empty() && !level.allows_empty_password() {
            let current: i64 = self.get("ul").await?;
            return AccessLevel::try_from(current);
        }

        let args = [Value::from(level.as_i64()), Value::from(password)];
        let result = AccessLevel::try_from(self.exec_returning::<i64>("change-ul", &args).await?)?;
        if result == level && self.inner.registry.is_attached() {
            self.inner.registry.send_request(format!(
                "(change-ul {} {})\r\n",
                level.as_i64(),
                args[1].encode()
            ))?;
        }
        info!(level = %result, "User level changed");
        Ok(result)
    }

    /// Subscribe to changes of a parameter.
    ///
    /// Fails with [`DecofError::MonitoringUnsupported`] on transports without
    /// a monitoring line and with [`DecofError::NotConnected`] before
    /// [`Client::open`].
    pub fn subscribe<T: DecofType>(&self, name: &str) -> Result<Subscription<T>> {
        if !self.inner.connection.monitoring_line_supported() {
            return Err(DecofError::MonitoringUnsupported);
        }
        Subscription::new(name, self.inner.registry.clone())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("device", &self.inner.connection.describe())
            .finish_non_exhaustive()
    }
}

fn check_set_status(name: &str, response: &str) -> Result<()> {
    let status = i64::decode(response)?;
    if status != 0 {
        return Err(DecofError::SetFailed {
            name: name.to_string(),
            status,
        });
    }
    Ok(())
}

/// Split a command response into its output stream and the final line.
///
/// Line endings inside the output are kept.
fn split_response(response: &str) -> (String, &str) {
    let lines: Vec<&str> = response.split_inclusive('\n').collect();
    match lines.split_last() {
        Some((last, output)) => (output.concat(), last),
        None => (String::new(), ""),
    }
}

async fn run_monitor_reader<R>(reader: R, registry: Arc<SubscriptionRegistry>, generation: u64)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line
                    .trim_start_matches(|c: char| c == '>' || c.is_whitespace())
                    .trim_end();
                // Banner and replies to requests are not change messages.
                if !line.starts_with('(') {
                    if !line.is_empty() {
                        debug!(line, "Monitoring line message");
                    }
                    continue;
                }
                match MonitoringUpdate::parse(line) {
                    Ok(update) => registry.dispatch(update),
                    Err(e) => warn!(error = %e, "Dropping monitoring message"),
                }
            }
            Ok(None) => {
                info!("Monitoring line closed by device");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Monitoring line read failed");
                break;
            }
        }
    }
    if !registry.detach_generation(generation) {
        debug!(generation, "Monitoring line already replaced");
    }
}

async fn run_monitor_writer<W>(mut writer: W, mut requests: mpsc::UnboundedReceiver<String>)
where
    W: AsyncWrite + Unpin,
{
    while let Some(request) = requests.recv().await {
        let written = async {
            writer.write_all(request.as_bytes()).await?;
            writer.flush().await
        }
        .await;
        if let Err(e) = written {
            warn!(error = %e, "Monitoring line write failed");
            break;
        }
    }
}
