//! In-process event bus.
//!
//! Decouples event producers (team operations, deadline sweeps) from the
//! notification dispatcher. Single process, not durable: an event that is
//! published while no process is running is gone.

use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, error};

use crewdesk_core::events::DomainEvent;
use crewdesk_core::result::AppResult;

/// A subscriber invoked for every published event.
///
/// Handlers filter on `event.kind` internally. A handler failure is
/// logged and never reaches the publisher or sibling handlers.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handler name used in log context.
    fn name(&self) -> &'static str;

    /// Handle one event. Runs on its own task, off the publishing call stack.
    async fn handle(&self, event: DomainEvent) -> AppResult<()>;
}

/// In-process publish/subscribe mechanism for domain events.
///
/// Subscription happens once at startup; the handler list is effectively
/// read-only during event processing.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Called during startup wiring, before any publish.
    pub fn subscribe(&self, handler: Arc<dyn EventHandler>) {
        debug!(handler = handler.name(), "Registering event handler");
        self.handlers
            .write()
            .expect("event bus handler list poisoned")
            .push(handler);
    }

    /// Publish an event to every registered handler.
    ///
    /// Each handler invocation runs on its own spawned task, so publish
    /// returns as soon as the work is enqueued and a failing or slow
    /// handler cannot affect the publisher or its siblings.
    pub fn publish(&self, event: DomainEvent) {
        let handlers = self
            .handlers
            .read()
            .expect("event bus handler list poisoned")
            .clone();

        debug!(
            event_id = %event.id,
            kind = %event.kind,
            team_id = event.team_id,
            handlers = handlers.len(),
            "Publishing domain event"
        );

        for handler in handlers {
            let event = event.clone();
            tokio::spawn(async move {
                if let Err(e) = handler.handle(event.clone()).await {
                    error!(
                        handler = handler.name(),
                        event_id = %event.id,
                        kind = %event.kind,
                        team_id = event.team_id,
                        error = %e,
                        "Event handler failed"
                    );
                }
            });
        }
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers
            .read()
            .expect("event bus handler list poisoned")
            .len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crewdesk_core::error::AppError;
    use crewdesk_core::events::EventKind;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl EventHandler for CountingHandler {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn handle(&self, _event: DomainEvent) -> AppResult<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler for FailingHandler {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn handle(&self, _event: DomainEvent) -> AppResult<()> {
            Err(AppError::internal("boom"))
        }
    }

    fn sample_event() -> DomainEvent {
        DomainEvent::new(7, EventKind::TeamCreated, None, None, None)
    }

    #[tokio::test]
    async fn test_all_handlers_receive_event() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe(Arc::new(CountingHandler {
            count: Arc::clone(&count),
        }));
        bus.subscribe(Arc::new(CountingHandler {
            count: Arc::clone(&count),
        }));

        bus.publish(sample_event());
        bus.publish(sample_event());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failing_handler_does_not_affect_siblings() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe(Arc::new(FailingHandler));
        bus.subscribe(Arc::new(CountingHandler {
            count: Arc::clone(&count),
        }));

        bus.publish(sample_event());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_publish_with_no_handlers_is_a_noop() {
        let bus = EventBus::new();
        bus.publish(sample_event());
        assert_eq!(bus.handler_count(), 0);
    }
}
