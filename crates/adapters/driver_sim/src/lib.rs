//! # hearth-adapter-driver-sim
//!
//! Simulated hardware drivers. Each driver holds its "hardware" state in
//! memory and logs every setter invocation, standing in for the real GPIO
//! or radio layer.
//!
//! ## Provided drivers
//!
//! | Driver | Setters |
//! |--------|---------|
//! | [`SimLight`] | power, brightness, hue, saturation |
//! | [`SimSwitch`] | power |
//! | [`SimThermostat`] | power, setpoint |
//!
//! [`SimDriver`] wraps the three concrete types so a node can bind them
//! under a single driver type.
//!
//! ## Dependency rule
//!
//! Depends on `hearth-app` (the driver port) only.

mod devices;

pub use devices::{LightState, SimDriver, SimLight, SimSwitch, SimThermostat, ThermostatState};
