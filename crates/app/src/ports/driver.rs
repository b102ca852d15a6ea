//! Driver port — hardware setter entry points.
//!
//! These are the only hardware calls the write dispatcher depends on.
//! Setters are idempotent (level-triggered, not edge-triggered), complete
//! quickly, and model no hardware faults, so they return `()` rather than
//! a `Result`. Every method has a no-op default; a driver overrides only
//! the setters its hardware supports.

use std::future::Future;
use std::sync::Arc;

/// Hardware-facing setters invoked as a side effect of accepted writes.
pub trait DeviceDriver {
    /// Switch the device's main relay or emitter.
    fn set_power(&self, _on: bool) -> impl Future<Output = ()> + Send {
        async {}
    }

    /// Adjust light output intensity.
    fn set_brightness(&self, _value: i64) -> impl Future<Output = ()> + Send {
        async {}
    }

    /// Adjust light color hue.
    fn set_hue(&self, _value: i64) -> impl Future<Output = ()> + Send {
        async {}
    }

    /// Adjust light color saturation.
    fn set_saturation(&self, _value: i64) -> impl Future<Output = ()> + Send {
        async {}
    }

    /// Adjust the temperature setpoint.
    fn set_setpoint(&self, _value: i64) -> impl Future<Output = ()> + Send {
        async {}
    }
}

impl<T: DeviceDriver + Send + Sync> DeviceDriver for Arc<T> {
    fn set_power(&self, on: bool) -> impl Future<Output = ()> + Send {
        (**self).set_power(on)
    }

    fn set_brightness(&self, value: i64) -> impl Future<Output = ()> + Send {
        (**self).set_brightness(value)
    }

    fn set_hue(&self, value: i64) -> impl Future<Output = ()> + Send {
        (**self).set_hue(value)
    }

    fn set_saturation(&self, value: i64) -> impl Future<Output = ()> + Send {
        (**self).set_saturation(value)
    }

    fn set_setpoint(&self, value: i64) -> impl Future<Output = ()> + Send {
        (**self).set_setpoint(value)
    }
}
