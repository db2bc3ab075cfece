//! Firmware configuration.
//!
//! - `layout`: Display dimensions, face placement and loop timing
//! - `start`: Build-time wall clock start

pub mod layout;
pub mod start;

// Re-export at config level for convenience
pub use layout::{FACE_AREA, FRAMEBUFFER_SIZE, POLL_INTERVAL_MS, SCREEN_HEIGHT, SCREEN_WIDTH, SPI_FREQUENCY_HZ};
pub use start::start_time;
