//! Injectable time source
//!
//! Entity timestamps and token expiry both depend on "now"; routing every
//! read through this trait keeps those paths deterministic in tests.

use chrono::{DateTime, Utc};

/// A source of the current time
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used everywhere outside tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: std::sync::Arc<std::sync::Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: std::sync::Arc::new(std::sync::Mutex::new(instant)),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.lock().expect("clock lock") = instant;
    }

    /// Advance the clock by a duration
    pub fn advance(&self, duration: chrono::Duration) {
        let mut instant = self.instant.lock().expect("clock lock");
        *instant += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().expect("clock lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_frozen_until_advanced() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::at(start);
        assert_eq!(clock.now(), start);

        clock.advance(chrono::Duration::hours(2));
        assert_eq!(clock.now(), start + chrono::Duration::hours(2));
    }
}
