//! Blocking client.
//!
//! Wraps the async [`Client`](crate::Client) in a current-thread tokio
//! runtime owned by the wrapper. Background work (monitoring line reader and
//! writer) only makes progress while the runtime is driven: inside any
//! blocking call, [`Client::run`] or [`Client::poll`].

use std::future::Future;
use std::time::Duration;

use decof_core::{
    AccessLevel, DecofError, DecofType, Result, StreamData, StreamInput, Value, ValueType,
};
use tokio::runtime::{Builder, Runtime};

use crate::connection::Connection;
use crate::subscription::ParamUpdate;

/// Build the current-thread runtime used by blocking wrappers.
pub fn runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DecofError::from)
}

/// Blocking DeCoF client.
#[derive(Debug)]
pub struct Client {
    runtime: Runtime,
    inner: crate::Client,
}

impl Client {
    /// Client for `connection`.
    pub fn new(connection: impl Connection) -> Result<Self> {
        Self::from_async(crate::Client::new(connection))
    }

    /// Blocking wrapper around an existing async client.
    pub fn from_async(inner: crate::Client) -> Result<Self> {
        Ok(Self {
            runtime: runtime()?,
            inner,
        })
    }

    /// The wrapped async client.
    pub fn as_async(&self) -> &crate::Client {
        &self.inner
    }

    /// Run a future to completion on the client's runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// See [`crate::Client::open`].
    pub fn open(&self) -> Result<()> {
        self.block_on(self.inner.open())
    }

    /// See [`crate::Client::close`].
    pub fn close(&self) -> Result<()> {
        self.block_on(self.inner.close())
    }

    /// See [`crate::Client::get`].
    pub fn get<T: DecofType>(&self, name: &str) -> Result<T> {
        self.block_on(self.inner.get(name))
    }

    /// See [`crate::Client::get_value`].
    pub fn get_value(&self, name: &str, value_type: ValueType) -> Result<Value> {
        self.block_on(self.inner.get_value(name, value_type))
    }

    /// See [`crate::Client::get_values`].
    pub fn get_values(&self, name: &str, types: &[ValueType]) -> Result<Vec<Value>> {
        self.block_on(self.inner.get_values(name, types))
    }

    /// See [`crate::Client::set`].
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.block_on(self.inner.set(name, value))
    }

    /// See [`crate::Client::set_values`].
    pub fn set_values(&self, name: &str, values: &[Value]) -> Result<()> {
        self.block_on(self.inner.set_values(name, values))
    }

    /// See [`crate::Client::exec`].
    pub fn exec(&self, name: &str, args: &[Value]) -> Result<()> {
        self.block_on(self.inner.exec(name, args))
    }

    /// See [`crate::Client::exec_with_input`].
    pub fn exec_with_input(&self, name: &str, args: &[Value], input: StreamInput<'_>) -> Result<()> {
        self.block_on(self.inner.exec_with_input(name, args, input))
    }

    /// See [`crate::Client::exec_returning`].
    pub fn exec_returning<T: DecofType>(&self, name: &str, args: &[Value]) -> Result<T> {
        self.block_on(self.inner.exec_returning(name, args))
    }

    /// See [`crate::Client::exec_output`].
    pub fn exec_output<S: StreamData>(&self, name: &str, args: &[Value]) -> Result<S> {
        self.block_on(self.inner.exec_output(name, args))
    }

    /// See [`crate::Client::exec_output_returning`].
    pub fn exec_output_returning<S: StreamData, T: DecofType>(
        &self,
        name: &str,
        args: &[Value],
    ) -> Result<(S, T)> {
        self.block_on(self.inner.exec_output_returning(name, args))
    }

    /// See [`crate::Client::change_ul`].
    pub fn change_ul(&self, level: AccessLevel, password: &str) -> Result<AccessLevel> {
        self.block_on(self.inner.change_ul(level, password))
    }

    /// Subscribe to changes of a parameter.
    pub fn subscribe<T: DecofType>(&self, name: &str) -> Result<Subscription<'_, T>> {
        let inner = self.inner.subscribe(name)?;
        Ok(Subscription {
            runtime: &self.runtime,
            inner,
        })
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

/// Drive `runtime` for `duration`, or forever with `None`.
pub fn drive(runtime: &Runtime, duration: Option<Duration>) {
    match duration {
        Some(duration) => runtime.block_on(tokio::time::sleep(duration)),
        None => runtime.block_on(std::future::pending::<()>()),
    }
}

/// Blocking parameter subscription, tied to the client's runtime.
#[derive(Debug)]
pub struct Subscription<'a, T> {
    runtime: &'a Runtime,
    inner: crate::Subscription<T>,
}

impl<T: DecofType> Subscription<'_, T> {
    /// Parameter name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Wait for the next update; `None` once the stream has ended.
    pub fn recv(&mut self) -> Option<ParamUpdate<T>> {
        self.runtime.block_on(self.inner.recv())
    }

    /// Wait up to `timeout` for the next update.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<ParamUpdate<T>> {
        let inner = &mut self.inner;
        self.runtime
            .block_on(async { tokio::time::timeout(timeout, inner.recv()).await.ok().flatten() })
    }

    /// Next update if one is ready after processing pending work.
    pub fn try_recv(&mut self) -> Option<ParamUpdate<T>> {
        self.runtime.block_on(tokio::task::yield_now());
        self.inner.try_recv()
    }

    /// Stop receiving updates.
    pub fn cancel(self) {}
}
