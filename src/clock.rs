//! Time source abstraction
//!
//! Movements are stamped by a clock injected into the inventory manager, so
//! tests can supply deterministic timestamps instead of depending on the
//! wall clock.

use chrono::{DateTime, Utc};

/// A source of "now" timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
