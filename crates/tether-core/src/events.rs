//! Subscription registry and dispatch seam
//!
//! Host runtimes deliver events to components through an [`EventRegistry`].
//! Components subscribe during an explicit `register` call and are invoked
//! one at a time, to completion, in subscription order. There is no implicit
//! module-load registration anywhere in the workspace.
//!
//! Dispatch is cooperative and sequential: a handler error stops dispatch of
//! the current event and surfaces to the caller, mirroring a host runtime's
//! top-level error behavior.

use crate::errors::TetherError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// An event family with a subscription key per variant.
pub trait Keyed {
    /// Subscription key type for this event family.
    type Kind: Copy + Eq + Hash + Send + Sync + 'static;

    /// The subscription key of this event.
    fn kind(&self) -> Self::Kind;
}

/// A subscriber for events of family `E`.
#[async_trait]
pub trait EventHandler<E: Send + Sync>: Send + Sync {
    /// React to one event. Runs to completion before the next handler fires.
    async fn handle(&self, event: &E) -> Result<(), TetherError>;
}

/// Registry of event subscriptions for one host seam.
///
/// A host (or a test) constructs a registry, hands it to each component's
/// `register` call, then drives it with `dispatch`.
pub struct EventRegistry<E: Keyed + Send + Sync + 'static> {
    subscribers: HashMap<E::Kind, Vec<Arc<dyn EventHandler<E>>>>,
}

impl<E: Keyed + Send + Sync + 'static> EventRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Subscribe a handler to one event kind.
    pub fn subscribe(&mut self, kind: E::Kind, handler: Arc<dyn EventHandler<E>>) {
        self.subscribers.entry(kind).or_default().push(handler);
    }

    /// Deliver an event to every subscriber of its kind, in subscription
    /// order. Stops at and returns the first handler error.
    pub async fn dispatch(&self, event: &E) -> Result<(), TetherError> {
        if let Some(handlers) = self.subscribers.get(&event.kind()) {
            for handler in handlers {
                handler.handle(event).await?;
            }
        }
        Ok(())
    }

    /// Total number of subscriptions across all kinds.
    pub fn subscription_count(&self) -> usize {
        self.subscribers.values().map(Vec::len).sum()
    }

    /// Number of subscriptions for one kind.
    pub fn subscriptions_for(&self, kind: E::Kind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

impl<E: Keyed + Send + Sync + 'static> Default for EventRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum ProbeKind {
        Tick,
        Tock,
    }

    #[derive(Debug)]
    enum ProbeEvent {
        Tick,
        Tock,
    }

    impl Keyed for ProbeEvent {
        type Kind = ProbeKind;

        fn kind(&self) -> ProbeKind {
            match self {
                Self::Tick => ProbeKind::Tick,
                Self::Tock => ProbeKind::Tock,
            }
        }
    }

    struct Recorder {
        seen: Arc<Mutex<Vec<&'static str>>>,
        label: &'static str,
        fail: bool,
    }

    #[async_trait]
    impl EventHandler<ProbeEvent> for Recorder {
        async fn handle(&self, _event: &ProbeEvent) -> Result<(), TetherError> {
            self.seen.lock().expect("probe lock").push(self.label);
            if self.fail {
                return Err(TetherError::internal("recorder failure"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn dispatch_reaches_only_matching_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry: EventRegistry<ProbeEvent> = EventRegistry::new();
        registry.subscribe(
            ProbeKind::Tick,
            Arc::new(Recorder {
                seen: seen.clone(),
                label: "tick",
                fail: false,
            }),
        );

        registry
            .dispatch(&ProbeEvent::Tock)
            .await
            .expect("no subscribers means no failure");
        assert!(seen.lock().expect("probe lock").is_empty());

        registry
            .dispatch(&ProbeEvent::Tick)
            .await
            .expect("tick handler succeeds");
        assert_eq!(*seen.lock().expect("probe lock"), vec!["tick"]);
    }

    #[tokio::test]
    async fn dispatch_stops_at_first_error() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry: EventRegistry<ProbeEvent> = EventRegistry::new();
        registry.subscribe(
            ProbeKind::Tick,
            Arc::new(Recorder {
                seen: seen.clone(),
                label: "first",
                fail: true,
            }),
        );
        registry.subscribe(
            ProbeKind::Tick,
            Arc::new(Recorder {
                seen: seen.clone(),
                label: "second",
                fail: false,
            }),
        );

        let err = registry
            .dispatch(&ProbeEvent::Tick)
            .await
            .expect_err("first handler fails");
        assert!(matches!(err, TetherError::Internal { .. }));
        assert_eq!(*seen.lock().expect("probe lock"), vec!["first"]);
    }

    #[tokio::test]
    async fn counts_and_clear() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry: EventRegistry<ProbeEvent> = EventRegistry::new();
        registry.subscribe(
            ProbeKind::Tick,
            Arc::new(Recorder {
                seen: seen.clone(),
                label: "a",
                fail: false,
            }),
        );
        registry.subscribe(
            ProbeKind::Tock,
            Arc::new(Recorder {
                seen,
                label: "b",
                fail: false,
            }),
        );

        assert_eq!(registry.subscription_count(), 2);
        assert_eq!(registry.subscriptions_for(ProbeKind::Tick), 1);

        registry.clear();
        assert_eq!(registry.subscription_count(), 0);
    }
}
