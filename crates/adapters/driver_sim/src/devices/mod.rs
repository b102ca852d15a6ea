//! Simulated driver implementations — light, switch, thermostat.

mod light;
mod switch;
mod thermostat;

pub use light::{LightState, SimLight};
pub use switch::SimSwitch;
pub use thermostat::{SimThermostat, ThermostatState};

use hearth_app::ports::DeviceDriver;

/// Wrapper enum for the concrete simulated driver types.
///
/// Setters that a variant's hardware does not support are ignored, like
/// the port's no-op defaults.
pub enum SimDriver {
    Light(SimLight),
    Switch(SimSwitch),
    Thermostat(SimThermostat),
}

impl DeviceDriver for SimDriver {
    async fn set_power(&self, on: bool) {
        match self {
            Self::Light(d) => d.set_power(on).await,
            Self::Switch(d) => d.set_power(on).await,
            Self::Thermostat(d) => d.set_power(on).await,
        }
    }

    async fn set_brightness(&self, value: i64) {
        if let Self::Light(d) = self {
            d.set_brightness(value).await;
        }
    }

    async fn set_hue(&self, value: i64) {
        if let Self::Light(d) = self {
            d.set_hue(value).await;
        }
    }

    async fn set_saturation(&self, value: i64) {
        if let Self::Light(d) = self {
            d.set_saturation(value).await;
        }
    }

    async fn set_setpoint(&self, value: i64) {
        if let Self::Thermostat(d) = self {
            d.set_setpoint(value).await;
        }
    }
}
