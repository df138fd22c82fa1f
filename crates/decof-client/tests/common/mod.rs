//! In-memory DeCoF device for client tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use decof_client::{Connection, DecofError, DynStream, Result};
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader, DuplexStream};

/// Requests received by a fake device, in order, without the echo-off handshake.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Commands whose request is followed by an input stream terminated by `#`.
const INPUT_COMMANDS: &[&str] = &["(exec 'upload", "(exec 'laser1:recorder:load"];

/// Spawn a command line device on the current runtime.
///
/// `respond` maps a request (without the trailing newline) to the response
/// text sent before the prompt. Input streams are appended to the logged
/// request after a newline.
pub fn spawn_command_line<F>(respond: F) -> (DuplexStream, RequestLog)
where
    F: Fn(&str) -> String + Send + 'static,
{
    let (device, host) = tokio::io::duplex(64 * 1024);
    let log = RequestLog::default();
    tokio::spawn(serve(device, respond, log.clone()));
    (host, log)
}

/// Like [`spawn_command_line`], but on a dedicated thread with its own runtime.
pub fn spawn_command_line_thread<F>(respond: F) -> (DuplexStream, RequestLog)
where
    F: Fn(&str) -> String + Send + 'static,
{
    let (device, host) = tokio::io::duplex(64 * 1024);
    let log = RequestLog::default();
    let thread_log = log.clone();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(serve(device, respond, thread_log));
    });
    (host, log)
}

async fn serve<F>(device: DuplexStream, respond: F, log: RequestLog)
where
    F: Fn(&str) -> String + Send + 'static,
{
    let (reader, mut writer) = tokio::io::split(device);
    let mut reader = BufReader::new(reader);
    if writer.write_all(b"DeCoF Command Line\r\n> ").await.is_err() {
        return;
    }

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut request = line.trim_end().to_string();

        if INPUT_COMMANDS.iter().any(|c| request.starts_with(c)) {
            let mut input = Vec::new();
            if reader.read_until(b'#', &mut input).await.is_err() {
                break;
            }
            input.pop();
            request.push('\n');
            request.push_str(&String::from_utf8_lossy(&input));
        }

        let response = if request == "(param-set! 'echo #f)" {
            "0".to_string()
        } else {
            log.lock().push(request.clone());
            respond(&request)
        };

        let reply = format!("{}\n> ", response);
        if writer.write_all(reply.as_bytes()).await.is_err() {
            break;
        }
    }
}

/// Device side of a monitoring line.
pub struct MonitoringDevice {
    stream: BufReader<DuplexStream>,
}

impl MonitoringDevice {
    /// Create a monitoring line pair: (device side, client side).
    pub fn pair() -> (Self, DuplexStream) {
        let (device, host) = tokio::io::duplex(64 * 1024);
        (
            Self {
                stream: BufReader::new(device),
            },
            host,
        )
    }

    /// Read the next request sent by the client.
    pub async fn request(&mut self) -> String {
        let mut line = String::new();
        tokio::time::timeout(std::time::Duration::from_secs(2), self.stream.read_line(&mut line))
            .await
            .expect("monitoring request")
            .unwrap();
        line
    }

    /// True if no request arrives within a short time.
    pub async fn is_quiet(&mut self) -> bool {
        let mut buf = [0u8; 1];
        tokio::time::timeout(std::time::Duration::from_millis(50), self.stream.read(&mut buf))
            .await
            .is_err()
    }

    /// Push a change message.
    pub async fn push(&mut self, timestamp: &str, name: &str, value: &str) {
        let message = format!("(\"{}\" '{} {})\r\n", timestamp, name, value);
        self.stream.get_mut().write_all(message.as_bytes()).await.unwrap();
    }

    /// Push raw text.
    pub async fn push_raw(&mut self, text: &str) {
        self.stream.get_mut().write_all(text.as_bytes()).await.unwrap();
    }

    /// Close the device side.
    pub async fn hang_up(mut self) {
        self.stream.get_mut().shutdown().await.unwrap();
    }
}

/// Connection that hands out a fresh command and monitoring line on every open.
pub struct QueuedConnection {
    sessions: Mutex<VecDeque<(DuplexStream, DuplexStream)>>,
    monitoring_lines: Mutex<VecDeque<DuplexStream>>,
    timeout: Duration,
}

impl QueuedConnection {
    /// One `(command line, monitoring line)` pair per expected `open`.
    pub fn new(sessions: Vec<(DuplexStream, DuplexStream)>, timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(sessions.into()),
            monitoring_lines: Mutex::new(VecDeque::new()),
            timeout,
        }
    }
}

#[async_trait]
impl Connection for QueuedConnection {
    async fn connect_command_line(&self) -> Result<DynStream> {
        let (command, monitoring) = self
            .sessions
            .lock()
            .pop_front()
            .ok_or_else(|| DecofError::DeviceNotFound("no session left".into()))?;
        self.monitoring_lines.lock().push_back(monitoring);
        Ok(Box::new(command))
    }

    async fn connect_monitoring_line(&self) -> Result<Option<DynStream>> {
        let monitoring = self
            .monitoring_lines
            .lock()
            .pop_front()
            .ok_or_else(|| DecofError::DeviceNotFound("no monitoring line left".into()))?;
        Ok(Some(Box::new(monitoring)))
    }

    fn monitoring_line_supported(&self) -> bool {
        true
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn describe(&self) -> String {
        "queued".to_string()
    }
}
