//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hearth_app::ports::{DeviceDriver, DeviceRegistry, EventPublisher, ValueStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes under `/api` and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<R, D, VS, EP>(state: AppState<R, D, VS, EP>) -> Router
where
    R: DeviceRegistry + Send + Sync + 'static,
    D: DeviceDriver + Send + Sync + 'static,
    VS: ValueStore + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
