//! In-process device registry backed by process memory.
//!
//! Devices are created once at startup and never destroyed, so the
//! authoritative state lives in memory; durability across restarts is the
//! value store's job.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::id::DeviceId;

use crate::ports::DeviceRegistry;

/// In-memory [`DeviceRegistry`].
#[derive(Default)]
pub struct InMemoryRegistry {
    devices: Mutex<HashMap<DeviceId, Device>>,
}

impl InMemoryRegistry {
    fn lock(&self) -> MutexGuard<'_, HashMap<DeviceId, Device>> {
        self.devices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceRegistry for InMemoryRegistry {
    async fn register(&self, device: Device) -> Result<Device, HearthError> {
        let mut devices = self.lock();
        devices.insert(device.id, device.clone());
        Ok(device)
    }

    async fn get_by_id(&self, id: DeviceId) -> Result<Option<Device>, HearthError> {
        let devices = self.lock();
        Ok(devices.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Device>, HearthError> {
        let devices = self.lock();
        let mut all: Vec<Device> = devices.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn update(&self, device: Device) -> Result<Device, HearthError> {
        let mut devices = self.lock();
        if !devices.contains_key(&device.id) {
            return Err(NotFoundError {
                entity: "Device",
                id: device.id.to_string(),
            }
            .into());
        }
        devices.insert(device.id, device.clone());
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_domain::device::DeviceKind;
    use hearth_domain::param::Parameter;
    use hearth_domain::param::names;
    use hearth_domain::value::ParamValue;

    fn switch(name: &str) -> Device {
        Device::builder()
            .name(name)
            .kind(DeviceKind::Switch)
            .param(
                Parameter::builder()
                    .name(names::POWER)
                    .value(ParamValue::Bool(false))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_register_and_get_device() {
        let registry = InMemoryRegistry::default();
        let device = switch("Switch");
        let id = device.id;

        registry.register(device).await.unwrap();

        let fetched = registry.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Switch");
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let registry = InMemoryRegistry::default();
        let result = registry.get_by_id(DeviceId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_devices_sorted_by_name() {
        let registry = InMemoryRegistry::default();
        registry.register(switch("Thermostat")).await.unwrap();
        registry.register(switch("Light")).await.unwrap();
        registry.register(switch("Switch")).await.unwrap();

        let all = registry.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Light", "Switch", "Thermostat"]);
    }

    #[tokio::test]
    async fn should_update_registered_device() {
        let registry = InMemoryRegistry::default();
        let device = switch("Switch");
        let id = device.id;
        registry.register(device).await.unwrap();

        let mut updated = registry.get_by_id(id).await.unwrap().unwrap();
        updated
            .set_value(names::POWER, ParamValue::Bool(true))
            .unwrap();
        registry.update(updated).await.unwrap();

        let fetched = registry.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(
            fetched.param(names::POWER).unwrap().value,
            ParamValue::Bool(true)
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unregistered_device() {
        let registry = InMemoryRegistry::default();
        let result = registry.update(switch("Switch")).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
    }
}
