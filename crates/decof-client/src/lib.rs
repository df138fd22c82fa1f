//! `decof-client`
//!
//! Client for the DeCoF command and monitoring lines of TOPTICA laser
//! controllers.
//!
//! ## Key Types
//!
//! - [`Client`]: async client (`get`, `set`, `exec`, `change_ul`, `subscribe`)
//! - [`blocking::Client`]: the same operations on an owned runtime
//! - [`Connection`]: transports ([`NetworkConnection`], `SerialConnection`, [`StreamConnection`])
//! - [`Param`] / [`MutableParam`]: typed parameter handles
//! - [`Node`] / [`NodeRef`] / [`decof_node!`]: building blocks of generated device bindings
//! - [`ClientConfig`]: figment-based configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use decof_client::{Client, NetworkConnection};
//!
//! let client = Client::new(NetworkConnection::new("192.168.1.20"));
//! client.open().await?;
//! let mut emission = client.subscribe::<bool>("emission")?;
//! while let Some(update) = emission.recv().await {
//!     println!("{} {:?}", update.timestamp, update.value);
//! }
//! ```

pub mod blocking;
pub mod client;
mod command_line;
pub mod config;
pub mod connection;
pub mod node;
pub mod parameter;
#[cfg(feature = "serial")]
pub mod serial;
pub mod subscription;

pub use client::Client;
pub use config::{ClientConfig, ConnectionConfig};
pub use connection::{
    Connection, DeviceStream, DynStream, NetworkConnection, StreamConnection, COMMAND_LINE_PORT,
    DEFAULT_TIMEOUT, MONITORING_LINE_PORT,
};
pub use node::{Node, NodeRef};
pub use parameter::{
    DecofBinary, DecofBoolean, DecofInteger, DecofReal, DecofString, MutableDecofBinary,
    MutableDecofBoolean, MutableDecofInteger, MutableDecofReal, MutableDecofString, MutableParam,
    Param,
};
#[cfg(feature = "serial")]
pub use serial::SerialConnection;
pub use subscription::{ParamUpdate, Subscription};

pub use decof_core::{
    AccessLevel, DecofError, DecofType, Result, StreamData, StreamInput, StreamKind, Value,
    ValueType,
};
