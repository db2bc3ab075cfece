//! Build-time wall clock start.
//!
//! The board has no battery-backed clock, so the time of day at power-up is
//! baked in when the firmware is built:
//!
//! ```bash
//! POLAR_CLOCK_START=14:05:30 cargo build -p polar-clock-pico2 --release
//! ```
//!
//! Without the variable (or with a malformed value) the clock starts at
//! midnight. The buttons can move it forward at runtime.

use polar_clock_common::time::{ClockTime, parse_hms};

/// Raw `POLAR_CLOCK_START` value captured at compile time.
const START_TIME_ENV: Option<&str> = option_env!("POLAR_CLOCK_START");

/// Time of day the clock shows at power-up.
pub fn start_time() -> ClockTime { resolve(START_TIME_ENV) }

fn resolve(value: Option<&str>) -> ClockTime { value.and_then(parse_hms).unwrap_or(ClockTime::MIDNIGHT) }
