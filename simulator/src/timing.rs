//! Timing and window constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` common crate cannot.

use std::time::Duration;

/// How often the main loop samples the local clock.
///
/// Well under a second so a new second shows up promptly; the tick service
/// reports at most one tick per change no matter how often it is polled.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Pebble display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Pebble display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Window pixels per display pixel.
pub const WINDOW_SCALE: u32 = 3;
