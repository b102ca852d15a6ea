//! Device registration glue — the node's fixed device set.
//!
//! Three devices mirror a small workshop install: a color lightbulb, a
//! plain relay switch, and a thermostat with a read-only ambient reading
//! and a bounded setpoint.

use hearth_domain::device::{Device, DeviceKind};
use hearth_domain::error::HearthError;
use hearth_domain::param::{Access, Bounds, Parameter, UiHint, names};
use hearth_domain::value::ParamValue;

const DEFAULT_BRIGHTNESS: i64 = 25;
const DEFAULT_HUE: i64 = 180;
const DEFAULT_SATURATION: i64 = 100;
const DEFAULT_SETPOINT: i64 = 20;

/// The color lightbulb: power plus brightness/hue/saturation channels.
///
/// # Errors
///
/// Returns a validation error if the builders fail (should not happen
/// with hardcoded inputs).
pub fn lightbulb() -> Result<Device, HearthError> {
    Device::builder()
        .name("Light")
        .kind(DeviceKind::Lightbulb)
        .param(
            Parameter::builder()
                .name(names::NAME)
                .value(ParamValue::String("Light".to_string()))
                .build()?,
        )
        .param(
            Parameter::builder()
                .name(names::POWER)
                .value(ParamValue::Bool(false))
                .ui_hint(UiHint::Toggle)
                .build()?,
        )
        .param(
            Parameter::builder()
                .name(names::BRIGHTNESS)
                .value(ParamValue::Int(DEFAULT_BRIGHTNESS))
                .bounds(Bounds::new(0, 100, 1))
                .ui_hint(UiHint::Slider)
                .build()?,
        )
        .param(
            Parameter::builder()
                .name(names::HUE)
                .value(ParamValue::Int(DEFAULT_HUE))
                .bounds(Bounds::new(0, 360, 1))
                .ui_hint(UiHint::Slider)
                .build()?,
        )
        .param(
            Parameter::builder()
                .name(names::SATURATION)
                .value(ParamValue::Int(DEFAULT_SATURATION))
                .bounds(Bounds::new(0, 100, 1))
                .ui_hint(UiHint::Slider)
                .build()?,
        )
        .build()
}

/// The plain on/off relay switch.
///
/// # Errors
///
/// Returns a validation error if the builders fail.
pub fn switch() -> Result<Device, HearthError> {
    Device::builder()
        .name("Switch")
        .kind(DeviceKind::Switch)
        .param(
            Parameter::builder()
                .name(names::POWER)
                .value(ParamValue::Bool(false))
                .ui_hint(UiHint::Toggle)
                .build()?,
        )
        .build()
}

/// The thermostat: power, read-only ambient reading, bounded setpoint.
///
/// # Errors
///
/// Returns a validation error if the builders fail.
pub fn thermostat() -> Result<Device, HearthError> {
    Device::builder()
        .name("Thermostat")
        .kind(DeviceKind::Thermostat)
        .param(
            Parameter::builder()
                .name(names::POWER)
                .value(ParamValue::Bool(false))
                .ui_hint(UiHint::Toggle)
                .build()?,
        )
        .param(
            Parameter::builder()
                .name(names::TEMPERATURE)
                .value(ParamValue::Int(20))
                .access(Access::READ_ONLY)
                .ui_hint(UiHint::Text)
                .build()?,
        )
        .param(
            Parameter::builder()
                .name(names::TEMPERATURE_SET)
                .value(ParamValue::Int(DEFAULT_SETPOINT))
                .bounds(Bounds::new(15, 30, 1))
                .ui_hint(UiHint::Slider)
                .build()?,
        )
        .build()
}
