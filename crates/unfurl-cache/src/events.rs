//! In-process event bus for cache notifications.
//!
//! The event bus replaces the OS broadcast mechanism of platform
//! implementations with a process-local publish/subscribe primitive:
//!
//! - Unique subscription identifiers ([`SubscriptionId`])
//! - Subscriptions ([`Subscription`]) for receiving events
//! - The bus itself ([`EventBus`]) for publishing to all subscribers

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Events exchanged on the cache's notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    /// The host application changed foreground/background state.
    /// Published by the host; the cache refreshes on `foreground == true`.
    AppStateChanged {
        /// True when the application moved to the foreground.
        foreground: bool,
    },
    /// A refresh attempt completed and the scheme table is usable.
    /// Published by the cache after every refresh that reaches the
    /// notification step.
    CacheLoaded,
}

/// Unique identifier for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Create a new unique subscription ID.
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the numeric value of this subscription ID.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A subscription for receiving cache events.
#[derive(Debug)]
pub struct Subscription {
    /// Unique identifier for this subscription.
    id: SubscriptionId,
    /// Receiver for events.
    receiver: mpsc::Receiver<CacheEvent>,
}

impl Subscription {
    /// Get the unique identifier for this subscription.
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Receive the next event.
    ///
    /// Returns `None` if the subscription has been cancelled.
    pub async fn recv(&mut self) -> Option<CacheEvent> {
        self.receiver.recv().await
    }

    /// Try to receive an event without waiting.
    pub fn try_recv(&mut self) -> Result<CacheEvent, mpsc::error::TryRecvError> {
        self.receiver.try_recv()
    }
}

/// Sender half of a subscription, held by the bus.
#[derive(Debug, Clone)]
struct EventSender {
    id: SubscriptionId,
    sender: mpsc::Sender<CacheEvent>,
}

impl EventSender {
    /// Try to send an event without blocking.
    ///
    /// A full buffer drops the event for this subscriber (it will see
    /// the next one). Returns `false` when the subscriber is gone.
    fn try_send(&self, event: CacheEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                trace!(subscription = %self.id, "subscriber buffer full, dropping event");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }
}

/// Process-local publish/subscribe channel for [`CacheEvent`]s.
///
/// Publishing never blocks; closed subscriptions are pruned on publish.
/// Uses a `Mutex` internally but operations are fast (no I/O).
#[derive(Debug)]
pub struct EventBus {
    /// Active subscribers.
    subscribers: std::sync::Mutex<Vec<EventSender>>,
    /// Channel buffer size for new subscriptions.
    channel_buffer: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a new event bus with default settings.
    pub fn new() -> Self {
        Self::with_buffer_size(16)
    }

    /// Create a new event bus with a custom subscription buffer size.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            subscribers: std::sync::Mutex::new(Vec::new()),
            channel_buffer: buffer_size,
        }
    }

    /// Create a new subscription.
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriptionId::next();
        let (sender, receiver) = mpsc::channel(self.channel_buffer);

        // Lock is held briefly, no I/O
        {
            let mut subscribers = self.subscribers.lock().expect("event bus lock poisoned");
            subscribers.push(EventSender { id, sender });
        }

        debug!(subscription = %id, "created subscription");

        Subscription { id, receiver }
    }

    /// Cancel a subscription.
    pub fn cancel(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().expect("event bus lock poisoned");
        if let Some(pos) = subscribers.iter().position(|s| s.id == id) {
            subscribers.swap_remove(pos);
            debug!(subscription = %id, "cancelled subscription");
        }
    }

    /// Publish an event to all live subscribers.
    ///
    /// Removes any closed subscriptions automatically.
    pub fn publish(&self, event: CacheEvent) {
        // Clone senders while holding the lock briefly
        let senders: Vec<EventSender> = {
            let subscribers = self.subscribers.lock().expect("event bus lock poisoned");
            subscribers.clone()
        };

        if senders.is_empty() {
            return;
        }

        let mut closed_ids = Vec::new();
        for sender in &senders {
            if !sender.try_send(event) {
                closed_ids.push(sender.id);
            }
        }

        if !closed_ids.is_empty() {
            let mut subscribers = self.subscribers.lock().expect("event bus lock poisoned");
            subscribers.retain(|s| !closed_ids.contains(&s.id));
            debug!(count = closed_ids.len(), "removed closed subscriptions");
        }

        trace!(
            ?event,
            subscriber_count = senders.len() - closed_ids.len(),
            "published event"
        );
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        let subscribers = self.subscribers.lock().expect("event bus lock poisoned");
        subscribers.len()
    }
}
