//! Write dispatcher — applies ordered parameter write batches to a
//! device's hardware driver and its authoritative state.
//!
//! For each batch entry, in submission order, the dispatcher checks the
//! proposed value against the parameter's declared access, type, and
//! bounds; invokes the driver action routed for that parameter name (a
//! name without a route is accepted as pass-through); and stages the value
//! for commit. A rejected entry never reaches the driver or the stored
//! state, and never stops the rest of the batch. After the last entry the
//! staged state is committed to the registry in one step and accepted
//! values are persisted, so readers see either the pre-batch or the
//! post-batch state of a device.
//!
//! Batches targeting the same device are serialized; the device is the
//! unit of mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::event::{Event, EventType};
use hearth_domain::id::DeviceId;
use hearth_domain::value::ParamValue;
use hearth_domain::write::{
    EntryOutcome, RejectReason, WriteBatch, WriteReport, WriteRequest, WriteSource, WriteStatus,
};

use crate::ports::{DeviceDriver, DeviceRegistry, EventPublisher, ValueStore};
use crate::routes::{ActionRoutes, DriverAction};

/// A driver bound to one registered device, with its parameter routes
/// resolved at bind time.
struct Binding<D> {
    routes: ActionRoutes,
    driver: D,
}

/// One async lock per device, serializing its batches.
type DeviceLocks = Mutex<HashMap<DeviceId, Arc<tokio::sync::Mutex<()>>>>;

/// Applies write batches to devices.
pub struct WriteDispatcher<R, D, VS, EP> {
    registry: R,
    value_store: VS,
    publisher: EP,
    bindings: HashMap<DeviceId, Binding<D>>,
    locks: DeviceLocks,
}

impl<R, D, VS, EP> WriteDispatcher<R, D, VS, EP>
where
    R: DeviceRegistry,
    D: DeviceDriver,
    VS: ValueStore,
    EP: EventPublisher,
{
    /// Create a dispatcher with no driver bindings.
    pub fn new(registry: R, value_store: VS, publisher: EP) -> Self {
        Self {
            registry,
            value_store,
            publisher,
            bindings: HashMap::new(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Attach a driver to a registered device.
    ///
    /// The parameter-name → action routes are resolved from the device kind
    /// here, once, not on every write. A device without a binding accepts
    /// writes but drives no hardware.
    pub fn bind(&mut self, device: &Device, driver: D) {
        self.bindings.insert(
            device.id,
            Binding {
                routes: ActionRoutes::for_kind(device.kind),
                driver,
            },
        );
    }

    /// Apply a write batch to a device.
    ///
    /// Entries are processed in submission order and the whole batch runs
    /// to completion; a rejected entry is reported in the returned
    /// [`WriteReport`] while the remaining entries still apply. Applying
    /// the same batch twice yields the same final state and the same
    /// driver call sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `device_id`
    /// is registered, or a storage error from committing accepted values.
    #[tracing::instrument(skip(self, batch), fields(source = %batch.source, count = batch.len()))]
    pub async fn dispatch(
        &self,
        device_id: DeviceId,
        batch: WriteBatch,
    ) -> Result<WriteReport, HearthError> {
        let lock = self.device_lock(device_id);
        let _guard = lock.lock().await;

        let mut device =
            self.registry
                .get_by_id(device_id)
                .await?
                .ok_or_else(|| NotFoundError {
                    entity: "Device",
                    id: device_id.to_string(),
                })?;

        tracing::info!(device = %device.name, "received write request via {}", batch.source);

        let binding = self.bindings.get(&device_id);
        let mut outcomes = Vec::with_capacity(batch.len());
        for request in &batch.writes {
            let status = Self::apply_entry(&mut device, binding, request).await;
            outcomes.push(EntryOutcome {
                param: request.param.clone(),
                status,
            });
        }

        if outcomes.iter().any(|o| o.status.is_applied()) {
            self.registry.update(device.clone()).await?;
            self.persist_applied(&device, &outcomes).await?;
        }

        self.reflect(&device, &batch, &outcomes).await;

        Ok(WriteReport {
            device_id,
            source: batch.source,
            outcomes,
        })
    }

    /// Apply a single parameter write — a batch of size one.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch`](Self::dispatch).
    pub async fn dispatch_single(
        &self,
        device_id: DeviceId,
        param: &str,
        value: ParamValue,
        source: WriteSource,
    ) -> Result<WriteReport, HearthError> {
        self.dispatch(device_id, WriteBatch::single(source, param, value))
            .await
    }

    /// Validate one entry, drive the hardware, and stage the value.
    async fn apply_entry(
        device: &mut Device,
        binding: Option<&Binding<D>>,
        request: &WriteRequest,
    ) -> WriteStatus {
        let Some(param) = device.param(&request.param) else {
            return WriteStatus::Rejected {
                reason: RejectReason::UnknownParam,
            };
        };
        if let Err(reason) = param.check_write(&request.value) {
            tracing::debug!(param = %request.param, %reason, "rejected write entry");
            return WriteStatus::Rejected { reason };
        }

        if let Some(binding) = binding {
            if let Some(action) = binding.routes.resolve(&request.param) {
                Self::drive(&binding.driver, action, &request.value).await;
            } else {
                tracing::debug!(param = %request.param, "no driver action, accepting pass-through");
            }
        }

        if device
            .set_value(&request.param, request.value.clone())
            .is_err()
        {
            // unreachable: presence was checked above
            return WriteStatus::Rejected {
                reason: RejectReason::UnknownParam,
            };
        }
        WriteStatus::Applied
    }

    /// Invoke the driver setter matching the routed action.
    async fn drive(driver: &D, action: DriverAction, value: &ParamValue) {
        match (action, value) {
            (DriverAction::SetPower, ParamValue::Bool(on)) => driver.set_power(*on).await,
            (DriverAction::SetBrightness, ParamValue::Int(v)) => driver.set_brightness(*v).await,
            (DriverAction::SetHue, ParamValue::Int(v)) => driver.set_hue(*v).await,
            (DriverAction::SetSaturation, ParamValue::Int(v)) => driver.set_saturation(*v).await,
            (DriverAction::SetSetpoint, ParamValue::Int(v)) => driver.set_setpoint(*v).await,
            // The value already passed the slot's type check; a route
            // pointing at a differently-typed slot drives nothing.
            _ => {}
        }
    }

    /// Persist the committed value of each applied parameter, once per
    /// distinct name (the last write in the batch is the committed one).
    async fn persist_applied(
        &self,
        device: &Device,
        outcomes: &[EntryOutcome],
    ) -> Result<(), HearthError> {
        let mut seen: Vec<&str> = Vec::new();
        for outcome in outcomes {
            if outcome.status.is_applied() && !seen.contains(&outcome.param.as_str()) {
                seen.push(outcome.param.as_str());
            }
        }
        for name in seen {
            if let Some(param) = device.param(name) {
                self.value_store.save(&device.name, name, &param.value).await?;
            }
        }
        Ok(())
    }

    /// Publish one event per entry so observers can mirror the outcome.
    async fn reflect(&self, device: &Device, batch: &WriteBatch, outcomes: &[EntryOutcome]) {
        for (request, outcome) in batch.writes.iter().zip(outcomes) {
            let event = match &outcome.status {
                WriteStatus::Applied => Event::new(
                    EventType::ParamUpdated,
                    Some(device.id),
                    serde_json::json!({
                        "device": device.name,
                        "param": request.param,
                        "value": request.value,
                        "source": batch.source,
                    }),
                ),
                WriteStatus::Rejected { reason } => Event::new(
                    EventType::WriteRejected,
                    Some(device.id),
                    serde_json::json!({
                        "device": device.name,
                        "param": request.param,
                        "reason": reason.to_string(),
                        "source": batch.source,
                    }),
                ),
            };
            // publishing never aborts a processed batch
            let _ = self.publisher.publish(event).await;
        }
    }

    fn device_lock(&self, device_id: DeviceId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(device_id).or_default())
    }
}
