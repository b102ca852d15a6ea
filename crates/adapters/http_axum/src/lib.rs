//! # hearth-adapter-http-axum
//!
//! HTTP transport adapter. Exposes the registered devices over a JSON API,
//! delivers write batches from remote clients to the write dispatcher, and
//! streams accepted state changes back out over SSE.
//!
//! ## Dependency rule
//!
//! Depends on `hearth-app` (dispatcher, services, ports) and
//! `hearth-domain` only.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
