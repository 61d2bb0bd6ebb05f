//! Live screen metrics with change subscriptions
//!
//! [`ScreenMetricsProvider`] is the one stateful piece of the token
//! pipeline. It owns the last-known-good [`ScreenMetrics`] snapshot, asks the
//! host for fresh values through a [`MetricsSource`], and notifies listeners
//! when the host reports a rotation or resize.
//!
//! The provider is an explicit instance owned by the application root and
//! passed down to whatever needs it.
//!
//! # Example
//!
//! ```rust
//! use app_platform::{Platform, ScreenMetrics, ScreenMetricsProvider};
//!
//! let provider = ScreenMetricsProvider::fixed(ScreenMetrics::baseline());
//!
//! let subscription = provider.subscribe(|metrics| {
//!     println!("now {}x{}", metrics.width, metrics.height);
//! });
//!
//! // Host rotated the device
//! let rotated = ScreenMetrics::new(812.0, 375.0, 2.0, Platform::Ios);
//! assert!(provider.handle_change(rotated));
//! assert_eq!(provider.current(), rotated);
//!
//! subscription.unsubscribe();
//! ```

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;

use crate::metrics::ScreenMetrics;

/// Host binding that reports the current display metrics
///
/// Implementations must answer quickly and without blocking; returning
/// `None` means the host could not report metrics right now.
#[cfg_attr(test, mockall::automock)]
pub trait MetricsSource: Send + Sync {
    /// Query the host for the current metrics
    fn query(&self) -> Option<ScreenMetrics>;
}

/// Callback invoked with the new snapshot after a change
type Listener = Arc<dyn Fn(&ScreenMetrics) + Send + Sync>;

/// Registered listeners in registration order
#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    closed: bool,
}

impl ListenerRegistry {
    fn insert(&mut self, listener: Listener) -> Option<u64> {
        if self.closed {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        Some(id)
    }

    // Removed listeners are handed back so the caller can drop them after
    // releasing the lock; a listener may own a `Subscription` whose drop
    // locks the registry again.
    fn remove(&mut self, id: u64) -> Option<Listener> {
        let index = self.listeners.iter().position(|(lid, _)| *lid == id)?;
        Some(self.listeners.remove(index).1)
    }

    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }

    fn snapshot(&self) -> Vec<(u64, Listener)> {
        self.listeners.clone()
    }

    fn close(&mut self) -> Vec<(u64, Listener)> {
        self.closed = true;
        std::mem::take(&mut self.listeners)
    }
}

/// Process-lifetime source of screen metrics
///
/// Reads never fail: when the host reports nothing usable the provider
/// answers with the last valid snapshot, or [`ScreenMetrics::baseline`] if
/// none was ever seen.
pub struct ScreenMetricsProvider {
    /// Host binding (None for fixed providers)
    source: Option<Arc<dyn MetricsSource>>,
    /// Last snapshot that passed validation
    last_good: RwLock<ScreenMetrics>,
    /// Change listeners
    registry: Arc<Mutex<ListenerRegistry>>,
    /// Async change stream
    watch_tx: watch::Sender<ScreenMetrics>,
    /// Serializes store, send and dispatch across reporting threads
    changes: ReentrantMutex<()>,
    /// Set once by `shutdown`
    shut_down: AtomicBool,
}

impl ScreenMetricsProvider {
    /// Create a provider bound to a host metrics source
    ///
    /// The host is not queried until the first read or refresh.
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        Self::build(Some(source), ScreenMetrics::baseline())
    }

    /// Create a provider with no host binding, starting from `metrics`
    ///
    /// Invalid metrics are replaced by the baseline.
    pub fn fixed(metrics: ScreenMetrics) -> Self {
        let initial = match metrics.validate() {
            Ok(()) => metrics,
            Err(err) => {
                tracing::warn!("Invalid initial screen metrics, using baseline: {}", err);
                ScreenMetrics::baseline()
            }
        };
        Self::build(None, initial)
    }

    fn build(source: Option<Arc<dyn MetricsSource>>, initial: ScreenMetrics) -> Self {
        let (watch_tx, _) = watch::channel(initial);

        Self {
            source,
            last_good: RwLock::new(initial),
            registry: Arc::new(Mutex::new(ListenerRegistry::default())),
            watch_tx,
            changes: ReentrantMutex::new(()),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Latest known metrics
    ///
    /// Queries the host when one is bound. A fresh valid answer that differs
    /// from the stored snapshot is accepted as a change and notifies
    /// listeners before this returns.
    pub fn current(&self) -> ScreenMetrics {
        if let Some(source) = &self.source {
            if !self.is_shut_down() {
                match source.query() {
                    Some(metrics) => {
                        self.accept(metrics);
                    }
                    None => {
                        tracing::debug!("Host did not report screen metrics, using last known");
                    }
                }
            }
        }

        *self.last_good.read()
    }

    /// Last accepted snapshot without querying the host
    pub fn last_known(&self) -> ScreenMetrics {
        *self.last_good.read()
    }

    /// Report a dimension change carrying the new metrics
    ///
    /// Returns `true` when the snapshot changed and listeners were notified.
    /// Invalid metrics are logged and dropped; identical metrics are ignored.
    pub fn handle_change(&self, metrics: ScreenMetrics) -> bool {
        if self.is_shut_down() {
            tracing::debug!("Ignoring screen metrics change after shutdown");
            return false;
        }
        self.accept(metrics)
    }

    /// Re-query the host after a change event without payload
    pub fn refresh(&self) -> bool {
        if self.is_shut_down() {
            return false;
        }

        match self.source.as_ref().and_then(|source| source.query()) {
            Some(metrics) => self.accept(metrics),
            None => false,
        }
    }

    // Changes from different threads are applied one at a time, so the
    // stored snapshot, the watch channel and the listeners all end on the
    // same value. The lock is re-entrant: a listener may report a change.
    fn accept(&self, metrics: ScreenMetrics) -> bool {
        if let Err(err) = metrics.validate() {
            tracing::warn!("Ignoring invalid screen metrics: {}", err);
            return false;
        }

        let _serial = self.changes.lock();
        {
            let mut last = self.last_good.write();
            if *last == metrics {
                return false;
            }
            *last = metrics;
        }

        tracing::debug!(
            width = metrics.width,
            height = metrics.height,
            pixel_ratio = metrics.pixel_ratio,
            "Screen metrics changed"
        );

        self.watch_tx.send_replace(metrics);
        self.notify(&metrics);
        true
    }

    fn notify(&self, metrics: &ScreenMetrics) {
        let listeners = self.registry.lock().snapshot();

        for (id, listener) in listeners {
            // An earlier listener may have unsubscribed this one
            let active = self.registry.lock().contains(id);
            if active {
                listener(metrics);
            }
        }
    }

    /// Register a listener fired on every accepted change
    ///
    /// Listeners run synchronously in registration order. Dropping the
    /// returned [`Subscription`] unsubscribes. Subscribing after
    /// [`shutdown`](Self::shutdown) yields an inactive subscription.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ScreenMetrics) + Send + Sync + 'static,
    {
        let id = self.registry.lock().insert(Arc::new(listener));

        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Receiver that observes every accepted change
    pub fn watch(&self) -> watch::Receiver<ScreenMetrics> {
        self.watch_tx.subscribe()
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.registry.lock().listeners.len()
    }

    /// Tear the provider down
    ///
    /// Drops every listener and ignores later change reports. Reads keep
    /// returning the last known snapshot.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }

        let removed = self.registry.lock().close();
        tracing::debug!(listeners = removed.len(), "Screen metrics provider shut down");
        drop(removed);
    }

    /// Whether [`shutdown`](Self::shutdown) has been called
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl Default for ScreenMetricsProvider {
    fn default() -> Self {
        Self::fixed(ScreenMetrics::baseline())
    }
}

/// Handle returned by [`ScreenMetricsProvider::subscribe`]
///
/// Unsubscribing is idempotent and safe from inside the listener itself,
/// after shutdown, or after the provider is gone.
pub struct Subscription {
    registry: Weak<Mutex<ListenerRegistry>>,
    id: Option<u64>,
}

impl Subscription {
    /// Stop receiving notifications
    pub fn unsubscribe(&self) {
        let (Some(id), Some(registry)) = (self.id, self.registry.upgrade()) else {
            return;
        };

        let removed = registry.lock().remove(id);
        drop(removed);
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        match (self.id, self.registry.upgrade()) {
            (Some(id), Some(registry)) => registry.lock().contains(id),
            _ => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
