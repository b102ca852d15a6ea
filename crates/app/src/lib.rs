//! # hearth-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `DeviceRegistry` — authoritative device and parameter state
//!   - `DeviceDriver` — hardware setter entry points
//!   - `ValueStore` — durable last-known parameter values
//!   - `EventPublisher` — reflection of accepted state to observers
//! - Provide the **write dispatcher** that applies ordered parameter write
//!   batches to a device's driver and authoritative state
//! - Provide **in-process infrastructure** that doesn't need IO (event bus,
//!   device registry)
//! - Orchestrate domain objects without knowing *how* transport or
//!   persistence works
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only (plus `tokio::sync` for channels and
//! locks). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod dispatcher;
pub mod event_bus;
pub mod ports;
pub mod registry;
pub mod routes;
pub mod services;
