//! Broadcast bus that fans write outcomes out to observers.
//!
//! The dispatcher publishes one event per processed batch entry; transport
//! adapters subscribe and mirror the accepted state to remote clients (the
//! HTTP adapter's SSE stream). Delivery is best-effort: a subscriber that
//! falls behind the channel capacity loses the oldest events rather than
//! stalling dispatch.

use tokio::sync::broadcast;

use hearth_domain::error::HearthError;
use hearth_domain::event::Event;

use crate::ports::EventPublisher;

/// Fan-out event bus for a single process.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a bus buffering up to `capacity` undelivered events per
    /// subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Open a subscription. Only events published after this call are
    /// delivered to it.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    async fn publish(&self, event: Event) -> Result<(), HearthError> {
        // send only errors when nobody is listening; an unobserved event
        // is not a failure
        let _ = self.sender.send(event);
        Ok(())
    }
}
