//! Typed parameter trees.
//!
//! A device binding is a tree of structs, one per DeCoF node type. Every node
//! holds a [`NodeRef`] (client plus fully qualified path) and its children.
//! Children of the root use bare names; deeper children are joined with `:`,
//! e.g. `laser1:dl:cc:current-set`.
//!
//! Node structs are declared with [`decof_node!`](crate::decof_node).

use decof_core::{DecofType, Result, StreamData, StreamInput, Value};

use crate::client::Client;

/// A client bound to a position in the parameter tree.
#[derive(Debug, Clone)]
pub struct NodeRef {
    client: Client,
    path: String,
}

impl NodeRef {
    /// Root of the tree.
    pub fn root(client: Client) -> Self {
        Self::new(client, String::new())
    }

    /// Node at `path`.
    pub fn new(client: Client, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Fully qualified path; empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The client this node talks through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Reference to the child `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self {
            client: self.client.clone(),
            path: self.qualify(name),
        }
    }

    fn qualify(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}:{}", self.path, name)
        }
    }

    /// Execute the command `name` of this node.
    pub async fn exec(&self, name: &str, args: &[Value]) -> Result<()> {
        self.client.exec(&self.qualify(name), args).await
    }

    /// Execute the command `name`, feeding it an input stream.
    pub async fn exec_with_input(&self, name: &str, args: &[Value], input: StreamInput<'_>) -> Result<()> {
        self.client.exec_with_input(&self.qualify(name), args, input).await
    }

    /// Execute the command `name` and decode its return value.
    pub async fn exec_returning<T: DecofType>(&self, name: &str, args: &[Value]) -> Result<T> {
        self.client.exec_returning(&self.qualify(name), args).await
    }

    /// Execute the command `name` and collect its output stream.
    pub async fn exec_output<S: StreamData>(&self, name: &str, args: &[Value]) -> Result<S> {
        self.client.exec_output(&self.qualify(name), args).await
    }

    /// Execute the command `name`, returning its output stream and return value.
    pub async fn exec_output_returning<S: StreamData, T: DecofType>(
        &self,
        name: &str,
        args: &[Value],
    ) -> Result<(S, T)> {
        self.client.exec_output_returning(&self.qualify(name), args).await
    }
}

/// A typed view onto a position in the parameter tree.
pub trait Node: Sized {
    /// Build the typed view for `node`, binding all descendants.
    fn bind(node: NodeRef) -> Self;

    /// Position of this node.
    fn node(&self) -> &NodeRef;
}

/// Declare a node struct with typed children.
///
/// Each child is a field, an accessor of the same name, and the DeCoF name it
/// binds to. Children may be parameters or other nodes. Children are boxed so
/// that large trees stay small on the stack.
///
/// ```rust,ignore
/// decof_node! {
///     /// Current controller
///     pub struct CurrDrv {
///         current_set: MutableDecofReal = "current-set",
///         current_act: DecofReal = "current-act",
///         enabled: MutableDecofBoolean = "enabled",
///     }
/// }
/// ```
#[macro_export]
macro_rules! decof_node {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $field:ident : $ty:ty = $param:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            node: $crate::NodeRef,
            $( $field: ::std::boxed::Box<$ty>, )*
        }

        impl $crate::Node for $name {
            fn bind(node: $crate::NodeRef) -> Self {
                Self {
                    $( $field: ::std::boxed::Box::new(<$ty as $crate::Node>::bind(node.child($param))), )*
                    node,
                }
            }

            fn node(&self) -> &$crate::NodeRef {
                &self.node
            }
        }

        impl $name {
            $(
                #[doc = concat!("`", $param, "`")]
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::StreamConnection;
    use crate::parameter::{DecofReal, MutableDecofBoolean};

    decof_node! {
        /// Test node
        pub struct Driver {
            current_act: DecofReal = "current-act",
            enabled: MutableDecofBoolean = "enabled",
        }
    }

    decof_node! {
        pub struct Laser {
            cc: Driver = "cc",
        }
    }

    fn client() -> Client {
        let (_device, host) = tokio::io::duplex(16);
        Client::new(StreamConnection::new(host))
    }

    #[test]
    fn child_paths_are_colon_joined() {
        let root = NodeRef::root(client());
        assert_eq!(root.path(), "");
        assert_eq!(root.child("laser1").path(), "laser1");
        assert_eq!(root.child("laser1").child("dl").path(), "laser1:dl");
    }

    #[test]
    fn macro_binds_descendants() {
        let laser = Laser::bind(NodeRef::new(client(), "laser1:dl"));
        assert_eq!(laser.node().path(), "laser1:dl");
        assert_eq!(laser.cc().node().path(), "laser1:dl:cc");
        assert_eq!(laser.cc().current_act().name(), "laser1:dl:cc:current-act");
        assert_eq!(laser.cc().enabled().name(), "laser1:dl:cc:enabled");
    }
}
