//! Wall-clock time to ring angles.
//!
//! Every ring advances in 6° steps (60 steps per turn). Angles are degrees
//! clockwise from 12 o'clock in `0..360`, always rounded down to the active
//! step.

use crate::config::HourMode;
use crate::time::ClockTime;

/// Angular size of one ring step.
pub const DEGREES_PER_STEP: u16 = 6;

/// Round an angle down to its 6° step.
#[inline]
pub const fn quantize(degrees: u16) -> u16 { degrees - degrees % DEGREES_PER_STEP }

/// Seconds ring angle: one step per second.
#[inline]
pub const fn second_angle(time: ClockTime) -> u16 { time.second() as u16 * DEGREES_PER_STEP }

/// Minutes ring angle: one step per minute.
#[inline]
pub const fn minute_angle(time: ClockTime) -> u16 { time.minute() as u16 * DEGREES_PER_STEP }

/// Hours ring angle.
///
/// - 12h: `(hour % 12) * 30 + minute / 2`, one turn per half day
/// - 24h: `hour * 15 + minute / 4`, one turn per day
///
/// The result is quantized, so the hour ring moves one step every 12 minutes
/// (12h) or 24 minutes (24h).
pub const fn hour_angle(
    time: ClockTime,
    mode: HourMode,
) -> u16 {
    let hour = time.hour() as u16;
    let minute = time.minute() as u16;
    let raw = match mode {
        HourMode::Twelve => (hour % 12) * 30 + minute / 2,
        HourMode::TwentyFour => hour * 15 + minute / 4,
    };
    quantize(raw)
}
