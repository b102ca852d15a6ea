//! Shared application state for axum handlers.

use std::sync::Arc;

use hearth_app::dispatcher::WriteDispatcher;
use hearth_app::event_bus::InProcessEventBus;
use hearth_app::ports::{DeviceDriver, DeviceRegistry, EventPublisher, ValueStore};
use hearth_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the port implementations to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R, D, VS, EP> {
    /// Write dispatcher applying batches to devices.
    pub dispatcher: Arc<WriteDispatcher<R, D, VS, EP>>,
    /// Device registration and lookup service.
    pub device_service: Arc<DeviceService<R, VS, EP>>,
    /// Event bus handlers subscribe to for SSE streaming.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<R, D, VS, EP> Clone for AppState<R, D, VS, EP> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            device_service: Arc::clone(&self.device_service),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<R, D, VS, EP> AppState<R, D, VS, EP>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from the wired components.
    pub fn new(
        dispatcher: WriteDispatcher<R, D, VS, EP>,
        device_service: DeviceService<R, VS, EP>,
        event_bus: Arc<InProcessEventBus>,
    ) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            device_service: Arc::new(device_service),
            event_bus,
        }
    }
}
