//! Event bus implementation.
//!
//! Distributes `DesignEvent`s to registered synchronous handlers and to
//! async receivers via a broadcast channel. The bus is injected where
//! needed; there is no ambient global instance.

use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{DesignEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &DesignEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(DesignEvent) + Send + Sync>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Channel capacity for broadcast.
    pub channel_capacity: usize,
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
            enable_history: false,
            max_history_size: 1000,
        }
    }
}

/// Error types for event bus operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
    /// Channel is closed
    #[error("Event channel is closed")]
    ChannelClosed,
}

/// Central event bus for configurator-wide event distribution
pub struct EventBus {
    /// Broadcast channel sender
    sender: broadcast::Sender<DesignEvent>,
    /// Registered synchronous handlers
    handlers: Arc<RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>>,
    /// Event history (optional)
    history: Arc<RwLock<VecDeque<DesignEvent>>>,
    /// Configuration
    config: EventBusConfig,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity);
        Self {
            sender,
            handlers: Arc::new(RwLock::new(HashMap::new())),
            history: Arc::new(RwLock::new(VecDeque::new())),
            config,
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of broadcast receivers that will see the event,
    /// or an error if there are no subscribers of any kind.
    pub fn publish(&self, event: DesignEvent) -> Result<usize, EventBusError> {
        tracing::trace!(event = %event.description(), "publish");
        if self.config.enable_history {
            self.add_to_history(&event);
        }

        let handlers = self.handlers.read();
        for (filter, handler) in handlers.values() {
            if filter.matches(&event) {
                handler(event.clone());
            }
        }

        match self.sender.send(event) {
            Ok(count) => Ok(count),
            Err(_) => {
                if handlers.is_empty() {
                    Err(EventBusError::NoSubscribers)
                } else {
                    Ok(0)
                }
            }
        }
    }

    /// Register a synchronous handler for all events
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(DesignEvent) + Send + Sync + 'static,
    {
        self.subscribe_filtered(EventFilter::All, handler)
    }

    /// Register a synchronous handler with a category filter
    pub fn subscribe_filtered<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(DesignEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers
            .write()
            .insert(id, (filter, Box::new(handler)));
        id
    }

    /// Remove a previously registered handler
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.write().remove(&id).is_some()
    }

    /// Create an async receiver for the broadcast channel
    pub fn receiver(&self) -> broadcast::Receiver<DesignEvent> {
        self.sender.subscribe()
    }

    /// Snapshot of retained history, oldest first
    pub fn history(&self) -> Vec<DesignEvent> {
        self.history.read().iter().cloned().collect()
    }

    fn add_to_history(&self, event: &DesignEvent) {
        let mut history = self.history.write();
        history.push_back(event.clone());
        while history.len() > self.config.max_history_size {
            history.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.read().len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::SceneEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn handlers_receive_matching_events() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        bus.subscribe_filtered(EventFilter::Categories(vec![EventCategory::Scene]), move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        let _ = bus.publish(DesignEvent::Scene(SceneEvent::FloorChanged));
        let _ = bus.publish(DesignEvent::Error(crate::event_bus::events::ErrorEvent::Warning {
            message: "ignored".to_string(),
        }));

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        let id = bus.subscribe(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        let _ = bus.publish(DesignEvent::Scene(SceneEvent::FloorChanged));
        assert!(bus.unsubscribe(id));
        let _ = bus.publish(DesignEvent::Scene(SceneEvent::FloorChanged));

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn history_is_bounded() {
        let bus = EventBus::with_config(EventBusConfig {
            enable_history: true,
            max_history_size: 2,
            ..EventBusConfig::default()
        });
        for _ in 0..5 {
            let _ = bus.publish(DesignEvent::Scene(SceneEvent::FloorChanged));
        }
        assert_eq!(bus.history().len(), 2);
    }
}
