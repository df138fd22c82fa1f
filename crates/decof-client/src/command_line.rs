//! Command line framing.
//!
//! Every response on the command line is terminated by the prompt `"> "`.
//! After connecting, the device prints a banner followed by the prompt; the
//! client then switches off echo so responses contain only the result.

use std::time::Duration;

use decof_core::{DecofError, Result, StreamInput};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::connection::DynStream;

const PROMPT: &[u8] = b"> ";
const ECHO_OFF: &str = "(param-set! 'echo #f)\n";

/// An open command line with echo disabled.
pub(crate) struct CommandLine {
    stream: BufReader<DynStream>,
    timeout: Duration,
}

impl CommandLine {
    /// Synchronize with the prompt and switch off echo.
    ///
    /// When `greeted` is false the device has not printed a prompt yet, so an
    /// empty line is sent to request one.
    pub(crate) async fn open(stream: DynStream, timeout: Duration, greeted: bool) -> Result<Self> {
        let mut line = Self {
            stream: BufReader::new(stream),
            timeout,
        };

        if !greeted {
            line.write("\n").await?;
        }
        let banner = line.read_response().await?;
        if !banner.trim().is_empty() {
            tracing::debug!(banner = %banner.trim(), "Command line banner");
        }

        line.write(ECHO_OFF).await?;
        line.read_response().await?;
        Ok(line)
    }

    /// Send a request, optionally followed by an input stream, and read the response.
    pub(crate) async fn query(&mut self, request: &str, input: Option<&StreamInput<'_>>) -> Result<String> {
        self.write(request).await?;
        if let Some(input) = input {
            self.write(&input.encode()).await?;
        }
        self.read_response().await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        let stream = self.stream.get_mut();
        stream.write_all(text.as_bytes()).await?;
        stream.flush().await?;
        Ok(())
    }

    async fn read_response(&mut self) -> Result<String> {
        tokio::time::timeout(self.timeout, read_until_prompt(&mut self.stream))
            .await
            .map_err(|_| DecofError::Timeout(self.timeout))?
    }

    pub(crate) async fn shutdown(&mut self) {
        if let Err(e) = self.stream.get_mut().shutdown().await {
            tracing::debug!(error = %e, "Command line shutdown failed");
        }
    }
}

/// Read up to the next prompt and return the text before it.
///
/// The prompt and one trailing line break are stripped.
async fn read_until_prompt<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    loop {
        let n = reader.read_until(b' ', &mut buf).await?;
        if n == 0 {
            return Err(DecofError::Io {
                kind: std::io::ErrorKind::UnexpectedEof,
                message: "Connection closed by device".into(),
            });
        }
        if buf.ends_with(PROMPT) {
            break;
        }
    }

    buf.truncate(buf.len() - PROMPT.len());
    if buf.ends_with(b"\r\n") {
        buf.truncate(buf.len() - 2);
    } else if buf.ends_with(b"\n") {
        buf.truncate(buf.len() - 1);
    }

    String::from_utf8(buf).map_err(|e| DecofError::Protocol(format!("Response is not UTF-8: {}", e)))
}
