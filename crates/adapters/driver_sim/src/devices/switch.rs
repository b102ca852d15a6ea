//! Simulated switch — a single relay.

use std::sync::{Mutex, PoisonError};

use hearth_app::ports::DeviceDriver;

/// A simulated on/off relay.
#[derive(Default)]
pub struct SimSwitch {
    power: Mutex<bool>,
}

impl SimSwitch {
    /// Whether the relay is closed.
    #[must_use]
    pub fn is_on(&self) -> bool {
        *self.power.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceDriver for SimSwitch {
    async fn set_power(&self, on: bool) {
        tracing::debug!(on, "switch relay set");
        *self.power.lock().unwrap_or_else(PoisonError::into_inner) = on;
    }
}
