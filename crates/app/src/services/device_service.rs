//! Device service — use-cases for registering and reading devices.

use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::event::{Event, EventType};
use hearth_domain::id::DeviceId;

use crate::ports::{DeviceRegistry, EventPublisher, ValueStore};

/// Application service for device registration and lookup.
pub struct DeviceService<R, VS, EP> {
    registry: R,
    value_store: VS,
    publisher: EP,
}

impl<R, VS, EP> DeviceService<R, VS, EP>
where
    R: DeviceRegistry,
    VS: ValueStore,
    EP: EventPublisher,
{
    /// Create a new service backed by the given ports.
    pub fn new(registry: R, value_store: VS, publisher: EP) -> Self {
        Self {
            registry,
            value_store,
            publisher,
        }
    }

    /// Register a device, seeding persisted values over its declared
    /// defaults.
    ///
    /// A persisted value whose parameter no longer exists, or whose type no
    /// longer matches the declared slot, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if invariants fail, or a
    /// storage error from loading persisted values.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name))]
    pub async fn register_device(&self, mut device: Device) -> Result<Device, HearthError> {
        device.validate()?;

        for (name, value) in self.value_store.load(&device.name).await? {
            let matches_slot = device
                .param(&name)
                .is_some_and(|param| param.kind() == value.kind());
            if matches_slot {
                device.set_value(&name, value)?;
            } else {
                tracing::warn!(device = %device.name, param = %name, "ignoring stale persisted value");
            }
        }

        let device = self.registry.register(device).await?;
        let event = Event::new(
            EventType::DeviceRegistered,
            Some(device.id),
            serde_json::json!({"name": device.name, "kind": device.kind}),
        );
        // registration succeeded; reflection is not allowed to undo it
        let _ = self.publisher.publish(event).await;

        Ok(device)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        self.registry.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all registered devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn list_devices(&self) -> Result<Vec<Device>, HearthError> {
        self.registry.get_all().await
    }
}
