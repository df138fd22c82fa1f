//! DeCoF values and their command-line encoding.
//!
//! The DeCoF command line speaks a small Scheme-like syntax. Scalar values are
//! written as:
//!
//! | type    | example            |
//! |---------|--------------------|
//! | boolean | `#t`, `#f`         |
//! | integer | `42`, `-3`         |
//! | real    | `0.5`, `1e-06`     |
//! | string  | `"laser \"one\""`  |
//! | binary  | `&AAEC`            |
//!
//! [`DecofType`] is implemented for the five Rust types that back these values
//! (`bool`, `i64`, `f64`, `String`, `Vec<u8>`), which lets typed parameter
//! handles decode responses without going through [`Value`].

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{parse_error, DecofError, Result};

/// Type tag of a scalar DeCoF value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `#t` / `#f`
    Boolean,
    /// Signed integer
    Integer,
    /// Floating point number
    Real,
    /// Quoted string
    String,
    /// Base64 encoded bytes
    Binary,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Real => "real",
            ValueType::String => "string",
            ValueType::Binary => "binary",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ValueType {
    type Err = DecofError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Ok(ValueType::Boolean),
            "integer" | "int" => Ok(ValueType::Integer),
            "real" | "float" => Ok(ValueType::Real),
            "string" | "str" => Ok(ValueType::String),
            "binary" | "bytes" => Ok(ValueType::Binary),
            _ => Err(DecofError::Protocol(format!("Unknown value type '{}'", s))),
        }
    }
}

/// A dynamically typed DeCoF value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Real value
    Real(f64),
    /// String value
    String(String),
    /// Binary value
    Binary(Vec<u8>),
}

impl Value {
    /// The type tag of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Real(_) => ValueType::Real,
            Value::String(_) => ValueType::String,
            Value::Binary(_) => ValueType::Binary,
        }
    }

    /// Encode the value for the command line.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Value::Boolean(v) => encode_bool(*v),
            Value::Integer(v) => v.to_string(),
            Value::Real(v) => encode_real(*v),
            Value::String(v) => encode_string(v),
            Value::Binary(v) => format!("&{}", BASE64_STANDARD.encode(v)),
        }
    }

    /// Decode `text` as a value of the given type.
    pub fn decode(text: &str, value_type: ValueType) -> Result<Self> {
        Ok(match value_type {
            ValueType::Boolean => Value::Boolean(bool::decode(text)?),
            ValueType::Integer => Value::Integer(i64::decode(text)?),
            ValueType::Real => Value::Real(f64::decode(text)?),
            ValueType::String => Value::String(String::decode(text)?),
            ValueType::Binary => Value::Binary(Vec::<u8>::decode(text)?),
        })
    }

    /// Parse a literal whose type is implied by its syntax.
    ///
    /// `#t`/`#f` are booleans, quoted text is a string, `&...` is binary, anything
    /// that parses as an integer or a real is numeric. Bare words fall back to
    /// strings so that command-line users can skip the quotes.
    pub fn parse_literal(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed == "#t" || trimmed == "#f" {
            return Value::decode(trimmed, ValueType::Boolean);
        }
        if trimmed.starts_with('"') {
            return Value::decode(trimmed, ValueType::String);
        }
        if trimmed.starts_with('&') {
            return Value::decode(trimmed, ValueType::Binary);
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Value::Integer(v));
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return Ok(Value::Real(v));
        }
        Ok(Value::String(trimmed.to_string()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Binary(v) => write!(f, "&{}", BASE64_STANDARD.encode(v)),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Binary(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

/// Rust types that map onto a scalar DeCoF type.
pub trait DecofType: Sized + Clone + Send + Sync + fmt::Debug + 'static {
    /// The DeCoF type this Rust type represents.
    const VALUE_TYPE: ValueType;

    /// Decode a command-line response.
    fn decode(text: &str) -> Result<Self>;

    /// Convert into a dynamically typed [`Value`].
    fn into_value(self) -> Value;

    /// Encode for the command line.
    fn encode(&self) -> String {
        self.clone().into_value().encode()
    }
}

/// Strip whitespace and turn `Error:` responses into errors.
fn prepare(text: &str) -> Result<&str> {
    if let Some(err) = parse_error(text) {
        return Err(err);
    }
    Ok(text.trim())
}

impl DecofType for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn decode(text: &str) -> Result<Self> {
        match prepare(text)? {
            "#t" => Ok(true),
            "#f" => Ok(false),
            other => Err(DecofError::value(ValueType::Boolean, other)),
        }
    }

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }
}

impl DecofType for i64 {
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn decode(text: &str) -> Result<Self> {
        let text = prepare(text)?;
        text.parse()
            .map_err(|_| DecofError::value(ValueType::Integer, text))
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl DecofType for f64 {
    const VALUE_TYPE: ValueType = ValueType::Real;

    fn decode(text: &str) -> Result<Self> {
        let text = prepare(text)?;
        text.parse().map_err(|_| DecofError::value(ValueType::Real, text))
    }

    fn into_value(self) -> Value {
        Value::Real(self)
    }
}

impl DecofType for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn decode(text: &str) -> Result<Self> {
        let text = prepare(text)?;
        let inner = text
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .ok_or_else(|| DecofError::value(ValueType::String, text))?;
        unescape_string(inner).ok_or_else(|| DecofError::value(ValueType::String, text))
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl DecofType for Vec<u8> {
    const VALUE_TYPE: ValueType = ValueType::Binary;

    fn decode(text: &str) -> Result<Self> {
        let text = prepare(text)?;
        let payload = text
            .strip_prefix('&')
            .ok_or_else(|| DecofError::value(ValueType::Binary, text))?;
        decode_base64(payload).ok_or_else(|| DecofError::value(ValueType::Binary, text))
    }

    fn into_value(self) -> Value {
        Value::Binary(self)
    }
}

fn encode_bool(v: bool) -> String {
    let text = if v { "#t" } else { "#f" };
    text.to_string()
}

fn encode_real(v: f64) -> String {
    // Debug formatting is the shortest representation that round-trips and
    // always marks the value as real ("1.0" rather than "1").
    format!("{:?}", v)
}

fn encode_string(v: &str) -> String {
    let mut out = String::with_capacity(v.len() + 2);
    out.push('"');
    for c in v.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn unescape_string(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next()?);
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Decode base64 text, ignoring embedded ASCII whitespace and line breaks.
pub(crate) fn decode_base64(text: &str) -> Option<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BASE64_STANDARD.decode(compact.as_bytes()).ok()
}

/// Encode bytes as standard base64.
pub(crate) fn encode_base64(data: &[u8]) -> String {
    BASE64_STANDARD.encode(data)
}

/// Split a list response `(a b "c d")` into its element texts.
///
/// Quoted strings may contain spaces; escapes inside strings are preserved so
/// that each element can be decoded on its own.
pub fn split_list(text: &str) -> Result<Vec<&str>> {
    let trimmed = text.trim();
    if let Some(err) = parse_error(trimmed) {
        return Err(err);
    }
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| DecofError::Protocol(format!("Expected a list, got '{}'", trimmed)))?;

    let mut items = Vec::new();
    let mut start: Option<usize> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in inner.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                items.push(&inner[s..idx]);
            }
        } else {
            if start.is_none() {
                start = Some(idx);
            }
            if c == '"' {
                in_string = true;
            }
        }
    }
    if in_string {
        return Err(DecofError::Protocol(format!(
            "Unterminated string in list '{}'",
            trimmed
        )));
    }
    if let Some(s) = start {
        items.push(&inner[s..]);
    }
    Ok(items)
}

/// Encode a list of values as a quoted list `'(a b c)`.
#[must_use]
pub fn encode_list(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::encode).collect();
    format!("'({})", items.join(" "))
}
