//! Clock access.

use chrono::{DateTime, Utc};

/// Instant in UTC, attached to events and persisted value updates.
pub type Timestamp = DateTime<Utc>;

/// Read the wall clock.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_go_backwards_between_readings() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
