//! Server-Sent Events (SSE) stream reflecting accepted state changes.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use hearth_app::ports::{DeviceDriver, DeviceRegistry, EventPublisher, ValueStore};

use crate::state::AppState;

/// `GET /api/events/stream` — live reflection of dispatch outcomes.
///
/// Each event published on the bus (parameter updates, rejections, device
/// registrations) is forwarded to the client as one JSON-encoded SSE
/// `data:` frame, until the client hangs up.
pub async fn stream<R, D, VS, EP>(
    State(state): State<AppState<R, D, VS, EP>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let event_rx = state.event_bus.subscribe();
    let event_stream = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(err) => {
                tracing::warn!(%err, "dropping unserializable event from SSE stream");
                None
            }
        },
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "slow SSE subscriber missed events");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_app::dispatcher::WriteDispatcher;
    use hearth_app::event_bus::InProcessEventBus;
    use hearth_app::services::device_service::DeviceService;
    use hearth_domain::device::Device;
    use hearth_domain::error::HearthError;
    use hearth_domain::event::{Event as DomainEvent, EventType};
    use hearth_domain::id::DeviceId;
    use hearth_domain::value::ParamValue;
    use std::sync::Arc;

    struct StubRegistry;
    struct StubDriver;
    struct StubStore;

    impl DeviceRegistry for StubRegistry {
        async fn register(&self, device: Device) -> Result<Device, HearthError> {
            Ok(device)
        }
        async fn get_by_id(&self, _id: DeviceId) -> Result<Option<Device>, HearthError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Device>, HearthError> {
            Ok(vec![])
        }
        async fn update(&self, device: Device) -> Result<Device, HearthError> {
            Ok(device)
        }
    }

    impl DeviceDriver for StubDriver {}

    impl ValueStore for StubStore {
        async fn load(&self, _device: &str) -> Result<Vec<(String, ParamValue)>, HearthError> {
            Ok(vec![])
        }
        async fn save(
            &self,
            _device: &str,
            _param: &str,
            _value: &ParamValue,
        ) -> Result<(), HearthError> {
            Ok(())
        }
    }

    fn test_state() -> (
        AppState<StubRegistry, StubDriver, StubStore, Arc<InProcessEventBus>>,
        Arc<InProcessEventBus>,
    ) {
        let event_bus = Arc::new(InProcessEventBus::new(16));
        let state = AppState::new(
            WriteDispatcher::new(StubRegistry, StubStore, Arc::clone(&event_bus)),
            DeviceService::new(StubRegistry, StubStore, Arc::clone(&event_bus)),
            Arc::clone(&event_bus),
        );
        (state, event_bus)
    }

    #[tokio::test]
    async fn should_keep_bus_flowing_while_stream_is_open() {
        let (state, event_bus) = test_state();

        // A direct subscription verifies events keep flowing on the bus
        // the SSE stream subscribed to.
        let mut rx = event_bus.subscribe();

        let _sse_response = stream(State(state)).await;

        let test_event = DomainEvent::new(
            EventType::ParamUpdated,
            Some(DeviceId::new()),
            serde_json::json!({"param": "Power", "value": true}),
        );
        let event_id = test_event.id;

        event_bus.publish(test_event).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, event_id);
        assert_eq!(received.event_type, EventType::ParamUpdated);
    }
}
