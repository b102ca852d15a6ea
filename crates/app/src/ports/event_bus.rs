//! Event publishing port.
//!
//! The dispatcher and services report state changes through this trait;
//! what carries them to observers (an in-process channel, a network
//! relay) is the implementer's concern.

use std::future::Future;
use std::sync::Arc;

use hearth_domain::error::HearthError;
use hearth_domain::event::Event;

/// Delivers domain events to whoever is listening.
pub trait EventPublisher {
    /// Hand one event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HearthError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HearthError>> + Send {
        (**self).publish(event)
    }
}
