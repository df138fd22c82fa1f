//! Typed parameters.
//!
//! [`Param<T>`] reads and monitors a parameter; [`MutableParam<T>`] adds
//! writing. The value type is fixed at compile time, so writing a string to
//! a real parameter does not type-check.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use decof_core::{DecofType, Result};

use crate::node::{Node, NodeRef};
use crate::subscription::Subscription;

/// Read-only parameter of type `T`.
pub struct Param<T> {
    node: NodeRef,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DecofType> Param<T> {
    /// Fully qualified parameter name.
    pub fn name(&self) -> &str {
        self.node.path()
    }

    /// Read the current value.
    pub async fn get(&self) -> Result<T> {
        self.node.client().get(self.name()).await
    }

    /// Subscribe to value changes.
    pub fn subscribe(&self) -> Result<Subscription<T>> {
        self.node.client().subscribe(self.name())
    }
}

impl<T: DecofType> Node for Param<T> {
    fn bind(node: NodeRef) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    fn node(&self) -> &NodeRef {
        &self.node
    }
}

impl<T> Clone for Param<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Param").field(&self.node.path()).finish()
    }
}

/// Read-write parameter of type `T`.
pub struct MutableParam<T> {
    param: Param<T>,
}

impl<T: DecofType> MutableParam<T> {
    /// Write a new value.
    pub async fn set(&self, value: impl Into<T>) -> Result<()> {
        let value: T = value.into();
        self.param
            .node
            .client()
            .set(self.param.name(), value.into_value())
            .await
    }
}

impl<T> Deref for MutableParam<T> {
    type Target = Param<T>;

    fn deref(&self) -> &Param<T> {
        &self.param
    }
}

impl<T: DecofType> Node for MutableParam<T> {
    fn bind(node: NodeRef) -> Self {
        Self {
            param: Param::bind(node),
        }
    }

    fn node(&self) -> &NodeRef {
        &self.param.node
    }
}

impl<T> Clone for MutableParam<T> {
    fn clone(&self) -> Self {
        Self {
            param: self.param.clone(),
        }
    }
}

impl<T> fmt::Debug for MutableParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableParam").field(&self.param.node.path()).finish()
    }
}

/// Read-only boolean parameter.
pub type DecofBoolean = Param<bool>;
/// Read-only integer parameter.
pub type DecofInteger = Param<i64>;
/// Read-only real parameter.
pub type DecofReal = Param<f64>;
/// Read-only string parameter.
pub type DecofString = Param<String>;
/// Read-only binary parameter.
pub type DecofBinary = Param<Vec<u8>>;

/// Writable boolean parameter.
pub type MutableDecofBoolean = MutableParam<bool>;
/// Writable integer parameter.
pub type MutableDecofInteger = MutableParam<i64>;
/// Writable real parameter.
pub type MutableDecofReal = MutableParam<f64>;
/// Writable string parameter.
pub type MutableDecofString = MutableParam<String>;
/// Writable binary parameter.
pub type MutableDecofBinary = MutableParam<Vec<u8>>;
