//! Driver routing — maps parameter names to driver actions.
//!
//! The map is resolved once per device kind at bind time, so dispatch does
//! a single lookup per entry instead of a chain of string comparisons, and
//! an unknown name is an explicit `None` (accepted as pass-through, no
//! physical effect).

use std::collections::HashMap;

use hearth_domain::device::DeviceKind;
use hearth_domain::param::names;

/// A hardware setter the dispatcher can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAction {
    SetPower,
    SetBrightness,
    SetHue,
    SetSaturation,
    SetSetpoint,
}

/// Parameter-name → driver-action map for one device.
#[derive(Debug, Clone)]
pub struct ActionRoutes {
    routes: HashMap<&'static str, DriverAction>,
}

impl ActionRoutes {
    /// Build the routes a device of the given kind responds to.
    #[must_use]
    pub fn for_kind(kind: DeviceKind) -> Self {
        let routes: &[(&'static str, DriverAction)] = match kind {
            DeviceKind::Lightbulb => &[
                (names::POWER, DriverAction::SetPower),
                (names::BRIGHTNESS, DriverAction::SetBrightness),
                (names::HUE, DriverAction::SetHue),
                (names::SATURATION, DriverAction::SetSaturation),
            ],
            DeviceKind::Switch => &[(names::POWER, DriverAction::SetPower)],
            DeviceKind::Thermostat => &[
                (names::POWER, DriverAction::SetPower),
                (names::TEMPERATURE_SET, DriverAction::SetSetpoint),
            ],
        };
        Self {
            routes: routes.iter().copied().collect(),
        }
    }

    /// Resolve a parameter name to its driver action, if it has one.
    #[must_use]
    pub fn resolve(&self, param: &str) -> Option<DriverAction> {
        self.routes.get(param).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_route_all_lightbulb_color_parameters() {
        let routes = ActionRoutes::for_kind(DeviceKind::Lightbulb);
        assert_eq!(routes.resolve(names::POWER), Some(DriverAction::SetPower));
        assert_eq!(
            routes.resolve(names::BRIGHTNESS),
            Some(DriverAction::SetBrightness)
        );
        assert_eq!(routes.resolve(names::HUE), Some(DriverAction::SetHue));
        assert_eq!(
            routes.resolve(names::SATURATION),
            Some(DriverAction::SetSaturation)
        );
    }

    #[test]
    fn should_route_only_power_for_switch() {
        let routes = ActionRoutes::for_kind(DeviceKind::Switch);
        assert_eq!(routes.resolve(names::POWER), Some(DriverAction::SetPower));
        assert_eq!(routes.resolve(names::BRIGHTNESS), None);
    }

    #[test]
    fn should_route_thermostat_setpoint() {
        let routes = ActionRoutes::for_kind(DeviceKind::Thermostat);
        assert_eq!(routes.resolve(names::POWER), Some(DriverAction::SetPower));
        assert_eq!(
            routes.resolve(names::TEMPERATURE_SET),
            Some(DriverAction::SetSetpoint)
        );
        // The ambient temperature reading is read-only and never driven.
        assert_eq!(routes.resolve(names::TEMPERATURE), None);
    }

    #[test]
    fn should_return_none_for_unknown_parameter_name() {
        let routes = ActionRoutes::for_kind(DeviceKind::Lightbulb);
        assert_eq!(routes.resolve(names::NAME), None);
        assert_eq!(routes.resolve("Volume"), None);
    }
}
