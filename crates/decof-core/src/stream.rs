//! Command stream data.
//!
//! Some DeCoF commands take an input stream (firmware images, scripts) or
//! produce an output stream (logs, service reports). Text streams travel as
//! plain text; binary streams are base64 encoded. Input streams are terminated
//! by a `#` on the command line.

use crate::error::{DecofError, Result};
use crate::value::{decode_base64, encode_base64, ValueType};

/// Kind of a command stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Plain text
    Text,
    /// Base64 encoded bytes
    Binary,
}

/// Borrowed input stream passed to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamInput<'a> {
    /// Text sent as-is
    Text(&'a str),
    /// Bytes sent as base64
    Binary(&'a [u8]),
}

impl StreamInput<'_> {
    /// The kind of this stream.
    #[must_use]
    pub fn kind(&self) -> StreamKind {
        match self {
            StreamInput::Text(_) => StreamKind::Text,
            StreamInput::Binary(_) => StreamKind::Binary,
        }
    }

    /// Wire representation including the `#` terminator.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            StreamInput::Text(text) => format!("{}#", text),
            StreamInput::Binary(data) => format!("{}#", encode_base64(data)),
        }
    }
}

impl<'a> From<&'a str> for StreamInput<'a> {
    fn from(text: &'a str) -> Self {
        StreamInput::Text(text)
    }
}

impl<'a> From<&'a String> for StreamInput<'a> {
    fn from(text: &'a String) -> Self {
        StreamInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for StreamInput<'a> {
    fn from(data: &'a [u8]) -> Self {
        StreamInput::Binary(data)
    }
}

impl<'a> From<&'a Vec<u8>> for StreamInput<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        StreamInput::Binary(data.as_slice())
    }
}

/// Rust types an output stream can be decoded into.
pub trait StreamData: Sized + Send + 'static {
    /// The stream kind this type represents.
    const KIND: StreamKind;

    /// Decode the collected output stream text.
    fn decode_stream(text: &str) -> Result<Self>;
}

impl StreamData for String {
    const KIND: StreamKind = StreamKind::Text;

    fn decode_stream(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl StreamData for Vec<u8> {
    const KIND: StreamKind = StreamKind::Binary;

    fn decode_stream(text: &str) -> Result<Self> {
        decode_base64(text).ok_or_else(|| DecofError::value(ValueType::Binary, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_streams_are_terminated() {
        assert_eq!(StreamInput::from("print 1").encode(), "print 1#");
        assert_eq!(StreamInput::from(&[0u8, 1, 2][..]).encode(), "AAEC#");
    }

    #[test]
    fn decodes_output_streams() {
        assert_eq!(String::decode_stream("line 1\nline 2\n").unwrap(), "line 1\nline 2\n");
        assert_eq!(Vec::<u8>::decode_stream("AA\nEC\n").unwrap(), vec![0, 1, 2]);
        assert!(Vec::<u8>::decode_stream("%%%").is_err());
    }

    #[test]
    fn stream_kinds() {
        assert_eq!(StreamInput::Text("x").kind(), StreamKind::Text);
        assert_eq!(StreamInput::Binary(b"x").kind(), StreamKind::Binary);
        assert_eq!(<String as StreamData>::KIND, StreamKind::Text);
        assert_eq!(<Vec<u8> as StreamData>::KIND, StreamKind::Binary);
    }
}
