//! `decof-core`
//!
//! Value model and wire format of the DeCoF protocol spoken by TOPTICA laser
//! controllers. This crate has no I/O; connections and the client live in
//! `decof-client`.
//!
//! ## Key Types
//!
//! - [`Value`] / [`ValueType`]: scalar DeCoF values and their type tags
//! - [`DecofType`]: Rust types that decode directly from command-line responses
//! - [`StreamInput`] / [`StreamData`]: command input and output streams
//! - [`AccessLevel`]: user levels of a session
//! - [`MonitoringUpdate`]: parsed monitoring line messages
//! - [`DecofError`]: the error type shared by all DeCoF crates
//!
//! ## Example
//!
//! ```rust
//! use decof_core::{DecofType, Value};
//!
//! assert_eq!(Value::from(true).encode(), "#t");
//! assert_eq!(i64::decode("42\n").unwrap(), 42);
//! ```

pub mod access;
pub mod error;
pub mod monitoring;
pub mod stream;
pub mod value;

pub use access::AccessLevel;
pub use error::{parse_error, DecofError, Result};
pub use monitoring::{MonitoringUpdate, MonitoringValue};
pub use stream::{StreamData, StreamInput, StreamKind};
pub use value::{encode_list, split_list, DecofType, Value, ValueType};
