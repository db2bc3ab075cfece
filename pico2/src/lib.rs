//! Polar clock firmware library: the parts that can be tested on the host.
//!
//! The binary (`main.rs`) adds the RP2350 specifics: embassy executor,
//! SPI display driver and GPIO. Everything here is plain logic.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p polar-clock-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p polar-clock-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

pub mod clock;
pub mod config;
pub mod input;
