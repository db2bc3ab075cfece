//! Color constants for the polar clock face.
//!
//! The face is strictly two-tone, so only the `RgbColor` trait constants are
//! needed. Rgb565 is kept as the color type because it is the native format
//! of the ST7789 and of the simulator display used for previews.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Window background behind all rings.
pub const FACE_BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Ring base disc. What stays visible in the band is the elapsed arc.
pub const RING_LIGHT: Rgb565 = Rgb565::WHITE;

/// Wedges for the remaining arc, and the inner erase disc.
pub const RING_DARK: Rgb565 = Rgb565::BLACK;
