//! Polar Clock Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the three-ring polar clock on the Pimoroni PIM715 Display Pack 2.8".
//!
//! # Architecture
//!
//! One embassy task polls the software clock every `POLL_INTERVAL_MS`. When
//! a second (or coarser unit) changes, the dirty rings are repainted into
//! the single framebuffer and the frame is pushed to the panel over SPI DMA.
//! Between ticks the loop only samples the buttons.
//!
//! # Button Controls
//!
//! - **X**: Hour forward
//! - **Y**: Minute forward
//! - **A**: Full repaint

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

// Modules only used in the binary (not testable on host)
mod display;
mod st7789;

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Instant, Ticker};
use polar_clock_common::framebuffer::FrameBuffer;
use polar_clock_common::{ClockTime, FaceConfig, PolarFace, TimeSource};
use polar_clock_pico2::clock::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SoftwareClock};
use polar_clock_pico2::config::{FACE_AREA, FRAMEBUFFER_SIZE, POLL_INTERVAL_MS, SCREEN_HEIGHT, SCREEN_WIDTH, start_time};
use polar_clock_pico2::input::{ButtonLevels, Buttons, ClockAction};
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::display_spi_config;
use crate::st7789::St7789;

/// Single RGB565 framebuffer (153,600 bytes).
static FRAMEBUFFER: ConstStaticCell<[u8; FRAMEBUFFER_SIZE]> = ConstStaticCell::new([0; FRAMEBUFFER_SIZE]);

/// Software clock read against the embassy uptime.
struct UptimeClock<'a>(&'a SoftwareClock);

impl TimeSource for UptimeClock<'_> {
    fn now(&self) -> ClockTime { self.0.at(Instant::now().as_millis()) }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Polar clock starting...");

    let p = embassy_rp::init(Default::default());

    // Initialize display pins
    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only SPI with DMA, the panel has no MISO
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());
    let mut panel = St7789::new(spi, dc, cs);
    panel.init().await;
    info!("Display initialized");

    // Buttons (active-low with internal pull-up)
    // PIM715: A=12, X=14, Y=15
    let btn_a = Input::new(p.PIN_12, Pull::Up);
    let btn_x = Input::new(p.PIN_14, Pull::Up);
    let btn_y = Input::new(p.PIN_15, Pull::Up);
    let mut buttons = Buttons::new();

    let Some(mut frame) = FrameBuffer::new(FRAMEBUFFER.take(), SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize) else {
        defmt::panic!("Framebuffer smaller than the panel");
    };

    let mut software_clock = SoftwareClock::new(start_time());
    let mut face = PolarFace::new(FACE_AREA, FaceConfig::default());
    info!("Clock started at {}", UptimeClock(&software_clock).now());

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let uptime_ms = Instant::now().as_millis();

        let levels = ButtonLevels {
            x_low: btn_x.is_low(),
            y_low: btn_y.is_low(),
            a_low: btn_a.is_low(),
        };
        for action in buttons.poll(levels, uptime_ms) {
            match action {
                ClockAction::HourForward => software_clock.advance(SECONDS_PER_HOUR),
                ClockAction::MinuteForward => software_clock.advance(SECONDS_PER_MINUTE),
                ClockAction::Repaint => face.invalidate(),
            }
            info!("Button: {}", defmt::Debug2Format(&action));
        }

        let clock = UptimeClock(&software_clock);
        face.poll(clock.now());

        if face.needs_redraw() {
            let render_start = Instant::now();
            let report = face.render(&mut frame, &clock).unwrap_or_default();
            let render_us = render_start.elapsed().as_micros();

            if report.painted() {
                let flush_start = Instant::now();
                panel.flush(frame.as_bytes()).await;
                debug!(
                    "Frame: {} ring(s) render={}us flush={}us",
                    report.rings,
                    render_us,
                    flush_start.elapsed().as_micros()
                );
            }
        }

        ticker.next().await;
    }
}
