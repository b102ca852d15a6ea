//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
pub mod sse;

use axum::Router;
use axum::routing::{get, post, put};

use hearth_app::ports::{DeviceDriver, DeviceRegistry, EventPublisher, ValueStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, D, VS, EP>() -> Router<AppState<R, D, VS, EP>>
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        // Devices
        .route("/devices", get(devices::list::<R, D, VS, EP>))
        .route("/devices/{id}", get(devices::get::<R, D, VS, EP>))
        .route("/devices/{id}/write", post(devices::write::<R, D, VS, EP>))
        .route(
            "/devices/{id}/params/{param}",
            put(devices::write_param::<R, D, VS, EP>),
        )
        // Events
        .route("/events/stream", get(sse::stream::<R, D, VS, EP>))
}
