//! Platform-agnostic core of the polar clock watch face.
//!
//! This crate holds everything that does not depend on a particular display
//! or time source, shared between the desktop simulator and the Pico 2
//! firmware:
//!
//! - [`time`]: Wall-clock snapshot and the [`TimeSource`] trait
//! - [`angle`]: Time to 6° quantized ring angles, 12h or 24h hour mapping
//! - [`wedge`]: Rotatable triangle stencil for one 6° segment
//! - [`ring`]: Parametrized ring renderer (base disc, wedges, inner erase)
//! - [`render`]: Per-ring dirty tracking driven by ticks
//! - [`tick`]: Units-changed bitmask and the polling tick service
//! - [`face`]: The three stacked rings as one owned face
//! - [`framebuffer`]: RGB565 `DrawTarget` over a byte slice
//! - [`colors`], [`config`]: Palette, ring table and hour mode
//!
//! # Ring layout
//!
//! ```text
//!        seconds  r=65  (bottom layer)
//!        minutes  r=55
//!        hours    r=45  (top layer)
//!        each ring shows a 5px band; light = elapsed, dark = remaining
//! ```
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Logging goes through the
//! `defmt` or `log` features and compiles away when neither is enabled.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub(crate) mod fmt;

pub mod angle;
pub mod colors;
pub mod config;
pub mod face;
pub mod framebuffer;
pub mod render;
pub mod ring;
pub mod tick;
pub mod time;
pub mod wedge;

// Re-export commonly used items
pub use config::{FaceConfig, HourMode};
pub use face::PolarFace;
pub use framebuffer::FrameBuffer;
pub use ring::RingKind;
pub use tick::{TickService, TimeUnits};
pub use time::{ClockTime, TimeSource};
