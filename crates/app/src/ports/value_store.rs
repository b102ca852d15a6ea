//! Value store port — durable last-known parameter values.
//!
//! Accepted writes are persisted here so a restarted node can seed its
//! devices with the values they held before shutdown.

use std::future::Future;
use std::sync::Arc;

use hearth_domain::error::HearthError;
use hearth_domain::value::ParamValue;

/// Persists the last accepted value of each parameter, keyed by device
/// name and parameter name.
pub trait ValueStore {
    /// Load all persisted values for one device.
    fn load(
        &self,
        device: &str,
    ) -> impl Future<Output = Result<Vec<(String, ParamValue)>, HearthError>> + Send;

    /// Persist one parameter's accepted value, replacing any previous one.
    fn save(
        &self,
        device: &str,
        param: &str,
        value: &ParamValue,
    ) -> impl Future<Output = Result<(), HearthError>> + Send;
}

impl<T: ValueStore + Send + Sync> ValueStore for Arc<T> {
    fn load(
        &self,
        device: &str,
    ) -> impl Future<Output = Result<Vec<(String, ParamValue)>, HearthError>> + Send {
        (**self).load(device)
    }

    fn save(
        &self,
        device: &str,
        param: &str,
        value: &ParamValue,
    ) -> impl Future<Output = Result<(), HearthError>> + Send {
        (**self).save(device, param, value)
    }
}
