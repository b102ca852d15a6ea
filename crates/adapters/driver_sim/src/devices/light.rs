//! Simulated light — power relay plus brightness/hue/saturation channels.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hearth_app::ports::DeviceDriver;

/// The light's simulated hardware state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightState {
    pub power: bool,
    pub brightness: i64,
    pub hue: i64,
    pub saturation: i64,
}

/// A simulated dimmable color light.
#[derive(Default)]
pub struct SimLight {
    state: Mutex<LightState>,
}

impl SimLight {
    /// Snapshot the current hardware state.
    #[must_use]
    pub fn state(&self) -> LightState {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, LightState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceDriver for SimLight {
    async fn set_power(&self, on: bool) {
        tracing::debug!(on, "light power set");
        self.lock().power = on;
    }

    async fn set_brightness(&self, value: i64) {
        tracing::debug!(value, "light brightness set");
        self.lock().brightness = value;
    }

    async fn set_hue(&self, value: i64) {
        tracing::debug!(value, "light hue set");
        self.lock().hue = value;
    }

    async fn set_saturation(&self, value: i64) {
        tracing::debug!(value, "light saturation set");
        self.lock().saturation = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_start_dark() {
        let light = SimLight::default();
        assert_eq!(light.state(), LightState::default());
    }

    #[tokio::test]
    async fn should_set_power() {
        let light = SimLight::default();
        light.set_power(true).await;
        assert!(light.state().power);
        light.set_power(false).await;
        assert!(!light.state().power);
    }

    #[tokio::test]
    async fn should_set_color_channels_independently() {
        let light = SimLight::default();
        light.set_brightness(80).await;
        light.set_hue(180).await;
        light.set_saturation(100).await;

        let state = light.state();
        assert_eq!(state.brightness, 80);
        assert_eq!(state.hue, 180);
        assert_eq!(state.saturation, 100);
        assert!(!state.power);
    }

    #[tokio::test]
    async fn should_be_idempotent_for_repeated_sets() {
        let light = SimLight::default();
        light.set_brightness(80).await;
        light.set_brightness(80).await;
        assert_eq!(light.state().brightness, 80);
    }
}
