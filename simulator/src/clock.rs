//! Host wall clock backed by `chrono`.

use chrono::{Local, Timelike};
use polar_clock_common::{ClockTime, TimeSource};

/// Local time of the machine running the simulator.
#[derive(Clone, Copy, Default, Debug)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        // chrono reports leap seconds through the nanosecond field, so the
        // second is always 0..=59
        ClockTime::from_hms(now.hour() as u8, now.minute() as u8, now.second() as u8).unwrap_or(ClockTime::MIDNIGHT)
    }
}
