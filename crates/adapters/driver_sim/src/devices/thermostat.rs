//! Simulated thermostat — power relay plus temperature setpoint.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hearth_app::ports::DeviceDriver;

/// The thermostat's simulated hardware state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermostatState {
    pub power: bool,
    pub setpoint: i64,
}

impl Default for ThermostatState {
    fn default() -> Self {
        Self {
            power: false,
            setpoint: 20,
        }
    }
}

/// A simulated heating controller.
#[derive(Default)]
pub struct SimThermostat {
    state: Mutex<ThermostatState>,
}

impl SimThermostat {
    /// Snapshot the current hardware state.
    #[must_use]
    pub fn state(&self) -> ThermostatState {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, ThermostatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceDriver for SimThermostat {
    async fn set_power(&self, on: bool) {
        tracing::debug!(on, "thermostat power set");
        self.lock().power = on;
    }

    async fn set_setpoint(&self, value: i64) {
        tracing::debug!(value, "thermostat setpoint set");
        self.lock().setpoint = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_start_off_at_default_setpoint() {
        let thermo = SimThermostat::default();
        let state = thermo.state();
        assert!(!state.power);
        assert_eq!(state.setpoint, 20);
    }

    #[tokio::test]
    async fn should_update_setpoint() {
        let thermo = SimThermostat::default();
        thermo.set_setpoint(22).await;
        assert_eq!(thermo.state().setpoint, 22);
    }

    #[tokio::test]
    async fn should_keep_setpoint_when_power_changes() {
        let thermo = SimThermostat::default();
        thermo.set_setpoint(25).await;
        thermo.set_power(true).await;

        let state = thermo.state();
        assert!(state.power);
        assert_eq!(state.setpoint, 25);
    }
}
