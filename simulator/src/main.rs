//! Polar clock simulator for desktop.
//!
//! Runs the face in an `embedded-graphics-simulator` window at the Pebble
//! resolution, driven by the local clock.
//!
//! Keys: `R` forces a full repaint, `Escape` quits.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod clock;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use polar_clock_common::{FaceConfig, PolarFace, TimeSource};

use crate::clock::LocalClock;
use crate::timing::{POLL_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};

fn main() {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Polar Clock", &output_settings);

    let clock = LocalClock;
    let mut face = PolarFace::for_display(&display, FaceConfig::default());
    info!("Polar clock started at {:?}", clock.now());

    // First reading starts the tick subscription, first pass paints everything
    face.poll(clock.now());
    face.render(&mut display, &clock).ok();
    window.update(&display);

    loop {
        let loop_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } if !repeat => match keycode {
                    Keycode::Escape => return,
                    Keycode::R => {
                        info!("Full repaint requested");
                        face.invalidate();
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        face.poll(clock.now());

        if face.needs_redraw() {
            let paint_start = Instant::now();
            if let Ok(report) = face.render(&mut display, &clock) {
                debug!("Repainted {} ring(s) in {:?}", report.rings, paint_start.elapsed());
            }
        }

        // Keeps the window responsive even when nothing was painted
        window.update(&display);

        if let Some(remaining) = POLL_INTERVAL.checked_sub(loop_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
