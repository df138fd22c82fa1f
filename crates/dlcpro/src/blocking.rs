//! Blocking access to the DLC pro tree.
//!
//! ```rust,ignore
//! use dlcpro::blocking::DLCpro;
//! use dlcpro::NetworkConnection;
//!
//! let dlc = DLCpro::new(NetworkConnection::new("192.168.1.20"))?;
//! dlc.open()?;
//! let uptime = dlc.block_on(dlc.uptime().get())?;
//! ```

use std::future::Future;
use std::ops::Deref;
use std::time::Duration;

use decof_client::blocking::{drive, runtime};
use decof_client::{AccessLevel, Client, Connection, Result};
use tokio::runtime::Runtime;

/// DLC pro tree driven by an owned current-thread runtime.
///
/// Derefs to the async tree; wrap its futures in [`DLCpro::block_on`].
#[derive(Debug)]
pub struct DLCpro {
    runtime: Runtime,
    tree: crate::DLCpro,
}

impl DLCpro {
    /// Tree for the device behind `connection`.
    pub fn new(connection: impl Connection) -> Result<Self> {
        Self::from_client(Client::new(connection))
    }

    /// Tree on an existing async client.
    pub fn from_client(client: Client) -> Result<Self> {
        Ok(Self {
            runtime: runtime()?,
            tree: crate::DLCpro::from_client(client),
        })
    }

    /// Run a future of the tree to completion.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Open the command and monitoring lines.
    pub fn open(&self) -> Result<()> {
        self.block_on(self.tree.open())
    }

    /// Close the connection.
    pub fn close(&self) -> Result<()> {
        self.block_on(self.tree.close())
    }

    /// Change the user level.
    pub fn change_ul(&self, level: AccessLevel, password: &str) -> Result<AccessLevel> {
        self.block_on(self.tree.change_ul(level, password))
    }

    /// Process monitoring traffic for `duration`, or forever with `None`.
    pub fn run(&self, duration: Option<Duration>) {
        drive(&self.runtime, duration);
    }

    /// Process work that is ready now and return.
    pub fn poll(&self) {
        self.runtime.block_on(tokio::task::yield_now());
    }
}

impl Deref for DLCpro {
    type Target = crate::DLCpro;

    fn deref(&self) -> &crate::DLCpro {
        &self.tree
    }
}
