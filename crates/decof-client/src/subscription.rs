//! Parameter subscriptions over the monitoring line.
//!
//! The registry fans monitoring messages out to every subscriber of a
//! parameter. The device is told to start monitoring a parameter when its
//! first subscriber arrives and to stop when the last one leaves.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use chrono::{DateTime, Utc};
use decof_core::monitoring::{add_request, remove_request};
use decof_core::{DecofError, DecofType, MonitoringUpdate, MonitoringValue, Result};
use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

type Subscriber = (u64, mpsc::UnboundedSender<MonitoringUpdate>);

#[derive(Default)]
struct RegistryState {
    next_id: u64,
    generation: u64,
    subscribers: HashMap<String, Vec<Subscriber>>,
    requests: Option<mpsc::UnboundedSender<String>>,
}

/// Subscribers by parameter name plus the outgoing request queue of the
/// monitoring line.
#[derive(Default)]
pub(crate) struct SubscriptionRegistry {
    state: Mutex<RegistryState>,
}

impl SubscriptionRegistry {
    /// Connect the registry to a monitoring line writer.
    ///
    /// Returns the generation of this line, used by its reader to detach
    /// only the line it serves.
    pub(crate) fn attach(&self, requests: mpsc::UnboundedSender<String>) -> u64 {
        let mut state = self.state.lock();
        state.generation += 1;
        state.requests = Some(requests);
        state.generation
    }

    /// Forget all subscribers; their receivers observe the end of the stream.
    pub(crate) fn detach(&self) {
        let mut state = self.state.lock();
        state.requests = None;
        state.subscribers.clear();
    }

    /// Detach if `generation` is still the attached line.
    ///
    /// Returns whether the registry was detached.
    pub(crate) fn detach_generation(&self, generation: u64) -> bool {
        let mut state = self.state.lock();
        if state.generation != generation || state.requests.is_none() {
            return false;
        }
        state.requests = None;
        state.subscribers.clear();
        true
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.state.lock().requests.is_some()
    }

    /// Queue a raw request on the monitoring line.
    pub(crate) fn send_request(&self, request: String) -> Result<()> {
        let state = self.state.lock();
        let requests = state.requests.as_ref().ok_or(DecofError::NotConnected)?;
        requests.send(request).map_err(|_| DecofError::NotConnected)
    }

    pub(crate) fn register(&self, name: &str) -> Result<(u64, mpsc::UnboundedReceiver<MonitoringUpdate>)> {
        let mut state = self.state.lock();
        let requests = state.requests.clone().ok_or(DecofError::NotConnected)?;

        let id = state.next_id;
        state.next_id += 1;
        let (tx, rx) = mpsc::unbounded_channel();

        let entry = state.subscribers.entry(name.to_string()).or_default();
        let first = entry.is_empty();
        entry.push((id, tx));
        if first {
            tracing::debug!(param = name, "Start monitoring");
            requests.send(add_request(name)).map_err(|_| DecofError::NotConnected)?;
        }
        Ok((id, rx))
    }

    pub(crate) fn unregister(&self, name: &str, id: u64) {
        let mut state = self.state.lock();
        let Some(entry) = state.subscribers.get_mut(name) else {
            return;
        };
        entry.retain(|(sid, _)| *sid != id);
        if !entry.is_empty() {
            return;
        }

        state.subscribers.remove(name);
        if let Some(requests) = &state.requests {
            tracing::debug!(param = name, "Stop monitoring");
            if requests.send(remove_request(name)).is_err() {
                tracing::debug!(param = name, "Monitoring line gone before remove");
            }
        }
    }

    pub(crate) fn subscriber_count(&self, name: &str) -> usize {
        self.state.lock().subscribers.get(name).map_or(0, Vec::len)
    }

    /// Deliver an update to every subscriber of its parameter.
    pub(crate) fn dispatch(&self, update: MonitoringUpdate) {
        let state = self.state.lock();
        match state.subscribers.get(&update.name) {
            Some(subscribers) => {
                for (_, tx) in subscribers {
                    // A closed receiver unregisters itself on drop.
                    let _ = tx.send(update.clone());
                }
            }
            None => tracing::trace!(param = %update.name, "Update without subscriber"),
        }
    }
}

/// A decoded parameter change.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamUpdate<T> {
    /// Device timestamp of the change
    pub timestamp: DateTime<Utc>,
    /// Fully qualified parameter name
    pub name: String,
    /// New value, or the error the device or decoder reported
    pub value: Result<T>,
}

impl<T: DecofType> ParamUpdate<T> {
    fn from_update(update: MonitoringUpdate) -> Self {
        let value = match update.value {
            MonitoringValue::Text(text) => T::decode(&text),
            MonitoringValue::Error(err) => Err(err),
        };
        Self {
            timestamp: update.timestamp,
            name: update.name,
            value,
        }
    }
}

/// Stream of changes of one parameter.
///
/// Dropping the subscription unsubscribes. The stream ends when the client
/// is closed or the monitoring line goes away.
pub struct Subscription<T> {
    id: u64,
    name: String,
    registry: Arc<SubscriptionRegistry>,
    rx: mpsc::UnboundedReceiver<MonitoringUpdate>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DecofType> Subscription<T> {
    pub(crate) fn new(name: &str, registry: Arc<SubscriptionRegistry>) -> Result<Self> {
        let (id, rx) = registry.register(name)?;
        Ok(Self {
            id,
            name: name.to_string(),
            registry,
            rx,
            _marker: PhantomData,
        })
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wait for the next update; `None` once the stream has ended.
    pub async fn recv(&mut self) -> Option<ParamUpdate<T>> {
        self.rx.recv().await.map(ParamUpdate::from_update)
    }

    /// Next update if one is already queued.
    pub fn try_recv(&mut self) -> Option<ParamUpdate<T>> {
        self.rx.try_recv().ok().map(ParamUpdate::from_update)
    }

    /// Stop receiving updates.
    pub fn cancel(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.registry.unregister(&self.name, self.id);
    }
}

impl<T: DecofType> Stream for Subscription<T> {
    type Item = ParamUpdate<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx).map(|update| update.map(ParamUpdate::from_update))
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(name: &str, value: &str) -> MonitoringUpdate {
        MonitoringUpdate::parse(&format!("(\"2024-05-01T10:00:00.000Z\" '{} {})", name, value)).unwrap()
    }

    fn attached() -> (Arc<SubscriptionRegistry>, mpsc::UnboundedReceiver<String>) {
        let registry = Arc::new(SubscriptionRegistry::default());
        let (tx, rx) = mpsc::unbounded_channel();
        registry.attach(tx);
        (registry, rx)
    }

    #[test]
    fn register_requires_monitoring_line() {
        let registry = Arc::new(SubscriptionRegistry::default());
        assert!(matches!(
            Subscription::<i64>::new("uptime", registry),
            Err(DecofError::NotConnected)
        ));
    }

    #[test]
    fn add_and_remove_sent_once_per_parameter() {
        let (registry, mut requests) = attached();

        let first = Subscription::<f64>::new("laser1:dl:cc:current-act", registry.clone()).unwrap();
        let second = Subscription::<f64>::new("laser1:dl:cc:current-act", registry.clone()).unwrap();
        assert_eq!(requests.try_recv().unwrap(), "(add 'laser1:dl:cc:current-act)\r\n");
        assert!(requests.try_recv().is_err());
        assert_eq!(registry.subscriber_count("laser1:dl:cc:current-act"), 2);

        drop(first);
        assert!(requests.try_recv().is_err());
        second.cancel();
        assert_eq!(requests.try_recv().unwrap(), "(remove 'laser1:dl:cc:current-act)\r\n");
        assert_eq!(registry.subscriber_count("laser1:dl:cc:current-act"), 0);
    }

    #[tokio::test]
    async fn dispatch_decodes_per_subscriber() {
        let (registry, _requests) = attached();
        let mut real = Subscription::<f64>::new("power", registry.clone()).unwrap();
        let mut other = Subscription::<bool>::new("emission", registry.clone()).unwrap();

        registry.dispatch(update("power", "12.5"));
        registry.dispatch(update("emission", "#t"));
        registry.dispatch(update("power", "Error: -11 not readable"));

        let first = real.recv().await.unwrap();
        assert_eq!(first.name, "power");
        assert_eq!(first.value.unwrap(), 12.5);
        assert!(other.recv().await.unwrap().value.unwrap());
        assert!(real.recv().await.unwrap().value.unwrap_err().is_device_error());
        assert!(real.try_recv().is_none());
    }

    #[tokio::test]
    async fn undecodable_value_is_reported_per_update() {
        let (registry, _requests) = attached();
        let mut sub = Subscription::<i64>::new("uptime", registry.clone()).unwrap();
        registry.dispatch(update("uptime", "abc"));
        assert!(matches!(sub.recv().await.unwrap().value, Err(DecofError::Value { .. })));
    }

    #[tokio::test]
    async fn detach_ends_streams() {
        use futures::StreamExt;

        let (registry, _requests) = attached();
        let mut sub = Subscription::<i64>::new("uptime", registry.clone()).unwrap();
        registry.dispatch(update("uptime", "7"));
        registry.detach();

        assert_eq!(sub.next().await.unwrap().value.unwrap(), 7);
        assert!(sub.next().await.is_none());
        assert!(!registry.is_attached());
    }

    #[tokio::test]
    async fn stale_line_does_not_detach_its_successor() {
        let registry = Arc::new(SubscriptionRegistry::default());
        let (old_tx, _old_rx) = mpsc::unbounded_channel();
        let old = registry.attach(old_tx);
        let (new_tx, mut new_rx) = mpsc::unbounded_channel();
        let current = registry.attach(new_tx);
        assert_ne!(old, current);

        let mut sub = Subscription::<i64>::new("uptime", registry.clone()).unwrap();
        assert_eq!(new_rx.try_recv().unwrap(), "(add 'uptime)\r\n");

        assert!(!registry.detach_generation(old));
        assert!(registry.is_attached());
        registry.dispatch(update("uptime", "42"));
        assert_eq!(sub.recv().await.unwrap().value.unwrap(), 42);

        assert!(registry.detach_generation(current));
        assert!(sub.recv().await.is_none());
    }
}
