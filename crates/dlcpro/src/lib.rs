//! `dlcpro`
//!
//! Typed parameter tree of the TOPTICA DLC pro laser controller.
//!
//! Every node of the device is a struct with one accessor per child; leaves
//! are typed parameters ([`decof_client::Param`], [`decof_client::MutableParam`])
//! and commands are async methods with typed arguments and results.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dlcpro::{DLCpro, NetworkConnection};
//!
//! let dlc = DLCpro::new(NetworkConnection::new("192.168.1.20"));
//! dlc.open().await?;
//! let current = dlc.laser1().dl().cc().current_act().get().await?;
//! dlc.laser1().dl().cc().current_set().set(current + 1.0).await?;
//! dlc.close().await?;
//! ```

pub mod blocking;
pub mod v2_0_3;

pub use v2_0_3::DLCpro;

pub use decof_client::{
    AccessLevel, Client, Connection, DecofError, NetworkConnection, Node, Result, StreamConnection,
};
#[cfg(test)]
mod tests {
    use super::*;
    use decof_client::Node as _;

    fn tree() -> DLCpro {
        let (_device, host) = tokio::io::duplex(16);
        DLCpro::new(StreamConnection::new(host))
    }

    #[test]
    fn root_children_use_bare_names() {
        let dlc = tree();
        assert_eq!(dlc.node().path(), "");
        assert_eq!(dlc.emission().name(), "emission");
        assert_eq!(dlc.system_label().name(), "system-label");
        assert_eq!(dlc.net_conf().ip_addr().name(), "net-conf:ip-addr");
    }

    #[test]
    fn nested_nodes_are_colon_joined() {
        let dlc = tree();
        let cc = dlc.laser1().dl().cc();
        assert_eq!(cc.node().path(), "laser1:dl:cc");
        assert_eq!(cc.current_set().name(), "laser1:dl:cc:current-set");
        assert_eq!(dlc.laser2().dl().cc().current_act().name(), "laser2:dl:cc:current-act");
    }

    #[test]
    fn keyword_children_are_suffixed() {
        let dlc = tree();
        assert_eq!(dlc.laser1().type_().name(), "laser1:type");
    }
}
