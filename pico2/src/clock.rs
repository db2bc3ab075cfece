//! Software wall clock.
//!
//! The RP2350 keeps uptime, not time of day. [`SoftwareClock`] stores the
//! time of day that corresponds to uptime zero and derives the current time
//! from the uptime the caller passes in, wrapping every 24 hours.

use polar_clock_common::time::{ClockTime, SECONDS_PER_DAY};

/// Seconds in one hour, the step of the hour button.
pub const SECONDS_PER_HOUR: u32 = 3600;

/// Seconds in one minute, the step of the minute button.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Time of day derived from uptime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SoftwareClock {
    /// Seconds of day at uptime zero, always below [`SECONDS_PER_DAY`].
    base: u32,
}

impl SoftwareClock {
    /// Clock showing `start` at uptime zero.
    pub const fn new(start: ClockTime) -> Self { Self { base: start.seconds_of_day() } }

    /// Time of day after `uptime_ms` milliseconds.
    pub const fn at(
        &self,
        uptime_ms: u64,
    ) -> ClockTime {
        let elapsed = (uptime_ms / 1000 % SECONDS_PER_DAY as u64) as u32;
        ClockTime::from_seconds_of_day(self.base + elapsed)
    }

    /// Move the clock forward, wrapping past midnight.
    pub fn advance(
        &mut self,
        seconds: u32,
    ) {
        self.base = (self.base + seconds % SECONDS_PER_DAY) % SECONDS_PER_DAY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(
        h: u8,
        m: u8,
        s: u8,
    ) -> ClockTime {
        ClockTime::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_starts_at_seed() {
        let clock = SoftwareClock::new(hms(14, 5, 30));
        assert_eq!(clock.at(0), hms(14, 5, 30));
        assert_eq!(clock.at(999), hms(14, 5, 30));
    }

    #[test]
    fn test_advances_with_uptime() {
        let clock = SoftwareClock::new(hms(14, 5, 30));
        assert_eq!(clock.at(1_000), hms(14, 5, 31));
        assert_eq!(clock.at(30_000), hms(14, 6, 0));
        assert_eq!(clock.at(3_600_000), hms(15, 5, 30));
    }

    #[test]
    fn test_wraps_at_midnight() {
        let clock = SoftwareClock::new(hms(23, 59, 59));
        assert_eq!(clock.at(1_000), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_long_uptime_wraps_daily() {
        let clock = SoftwareClock::new(ClockTime::MIDNIGHT);
        let ten_days_ms = 10 * u64::from(SECONDS_PER_DAY) * 1000;
        assert_eq!(clock.at(ten_days_ms + 61_000), hms(0, 1, 1));
    }

    #[test]
    fn test_advance_hour_and_minute() {
        let mut clock = SoftwareClock::new(hms(8, 59, 0));
        clock.advance(SECONDS_PER_MINUTE);
        assert_eq!(clock.at(0), hms(9, 0, 0));
        clock.advance(SECONDS_PER_HOUR);
        assert_eq!(clock.at(0), hms(10, 0, 0));
    }

    #[test]
    fn test_advance_wraps_past_midnight() {
        let mut clock = SoftwareClock::new(hms(23, 30, 0));
        clock.advance(SECONDS_PER_HOUR);
        assert_eq!(clock.at(0), hms(0, 30, 0));
        clock.advance(SECONDS_PER_DAY * 3);
        assert_eq!(clock.at(0), hms(0, 30, 0));
    }
}
