//! # hearthd — hearth daemon
//!
//! Composition root that wires all adapters together and starts the node.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize the `SQLite` pool and run migrations
//! - Construct the device registry, value store, and event bus
//! - Register the node's devices and bind their simulated drivers
//! - Push the seeded parameter values to the drivers (init-sourced batch)
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod devices;

use std::sync::Arc;

use hearth_adapter_driver_sim::{SimDriver, SimLight, SimSwitch, SimThermostat};
use hearth_adapter_http_axum::router;
use hearth_adapter_http_axum::state::AppState;
use hearth_adapter_storage_sqlite_sqlx::{Database, SqliteValueStore};
use hearth_app::dispatcher::WriteDispatcher;
use hearth_app::event_bus::InProcessEventBus;
use hearth_app::registry::InMemoryRegistry;
use hearth_app::services::device_service::DeviceService;
use hearth_domain::device::Device;
use hearth_domain::write::{WriteBatch, WriteSource};

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = Database::connect(config.database_url()).await?;
    let value_store = Arc::new(SqliteValueStore::new(db.pool().clone()));

    // In-process infrastructure
    let registry = Arc::new(InMemoryRegistry::default());
    let event_bus = Arc::new(InProcessEventBus::new(256));

    // Services
    let device_service = DeviceService::new(
        Arc::clone(&registry),
        Arc::clone(&value_store),
        Arc::clone(&event_bus),
    );

    // Devices and their drivers
    let mut dispatcher = WriteDispatcher::new(
        Arc::clone(&registry),
        Arc::clone(&value_store),
        Arc::clone(&event_bus),
    );

    let light = device_service.register_device(devices::lightbulb()?).await?;
    dispatcher.bind(&light, SimDriver::Light(SimLight::default()));

    let switch = device_service.register_device(devices::switch()?).await?;
    dispatcher.bind(&switch, SimDriver::Switch(SimSwitch::default()));

    let thermostat = device_service
        .register_device(devices::thermostat()?)
        .await?;
    dispatcher.bind(&thermostat, SimDriver::Thermostat(SimThermostat::default()));

    // Push the seeded values to the hardware before accepting writes
    for device in [&light, &switch, &thermostat] {
        dispatcher.dispatch(device.id, init_batch(device)).await?;
    }

    tracing::info!(node = %config.node.name, model = %config.node.model, "hearth node ready");

    // HTTP
    let state = AppState::new(dispatcher, device_service, Arc::clone(&event_bus));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("hearthd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// A device's writable parameters as one init-sourced batch.
fn init_batch(device: &Device) -> WriteBatch {
    device
        .params
        .iter()
        .filter(|param| param.access.writable)
        .fold(WriteBatch::new(WriteSource::Init), |batch, param| {
            batch.with(param.name.clone(), param.value.clone())
        })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install shutdown signal handler");
    }
}
