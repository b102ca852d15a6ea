//! Device registry port — authoritative device and parameter state.
//!
//! The registry owns the live device definitions and their current
//! parameter values. Devices are registered once at startup and never
//! removed; only parameter values change afterwards, committed by the
//! write dispatcher. Readers observe either a device's pre-batch or
//! post-batch state, never a half-committed one.

use std::future::Future;
use std::sync::Arc;

use hearth_domain::device::Device;
use hearth_domain::error::HearthError;
use hearth_domain::id::DeviceId;

/// Holds device definitions and their authoritative last-known values.
pub trait DeviceRegistry {
    /// Add a device to the registry.
    fn register(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send;

    /// Look up a device by id.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send;

    /// List all registered devices.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send;

    /// Replace a registered device's state (parameter values included).
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send;
}

impl<T: DeviceRegistry + Send + Sync> DeviceRegistry for Arc<T> {
    fn register(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send {
        (**self).register(device)
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send {
        (**self).get_all()
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send {
        (**self).update(device)
    }
}
