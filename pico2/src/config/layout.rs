//! Display and timing configuration constants.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use polar_clock_common::framebuffer::buffer_len;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240, landscape)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// SPI clock for the ST7789 (datasheet maximum).
pub const SPI_FREQUENCY_HZ: u32 = 62_500_000;

/// Single RGB565 framebuffer (153,600 bytes).
pub const FRAMEBUFFER_SIZE: usize = buffer_len(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);

/// Area the face occupies: the whole panel, rings centered at (160, 120).
pub const FACE_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Main Loop
// =============================================================================

/// Clock polling period. Ten polls per second keep the seconds ring within
/// 100 ms of the real second boundary.
pub const POLL_INTERVAL_MS: u64 = 100;
