//! Events — records of state changes reflected to observers.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, EventId};
use crate::time::{Timestamp, now};

/// Kind of a domain event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A device was registered with the node.
    DeviceRegistered,
    /// A parameter write was accepted and committed.
    ParamUpdated,
    /// A parameter write was rejected.
    WriteRejected,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviceRegistered => f.write_str("device_registered"),
            Self::ParamUpdated => f.write_str("param_updated"),
            Self::WriteRejected => f.write_str("write_rejected"),
        }
    }
}

/// A state-change record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub device_id: Option<DeviceId>,
    pub payload: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(
        event_type: EventType,
        device_id: Option<DeviceId>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            device_id,
            payload,
            timestamp: now(),
        }
    }
}
