//! Async ST7789 panel driver for embassy-rp.
//!
//! The face is rendered into a single RAM framebuffer (see
//! `polar_clock_common::framebuffer`); this driver only owns the SPI bus and
//! streams finished frames to the panel with one DMA transfer.

use defmt::debug;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use polar_clock_pico2::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

// ST7789 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// One step of the power-up sequence.
struct InitStep {
    command: u8,
    data: &'static [u8],
    delay_ms: u64,
}

/// Power-up sequence for the PIM715 in landscape RGB565.
const INIT_SEQUENCE: [InitStep; 7] = [
    InitStep { command: SWRESET, data: &[], delay_ms: 150 },
    InitStep { command: SLPOUT, data: &[], delay_ms: 10 },
    // 16 bits per pixel
    InitStep { command: COLMOD, data: &[0x55], delay_ms: 0 },
    // 90° rotation
    InitStep { command: MADCTL, data: &[MADCTL_MV | MADCTL_MX], delay_ms: 0 },
    // PIM715 needs inverted colors
    InitStep { command: INVON, data: &[], delay_ms: 10 },
    InitStep { command: NORON, data: &[], delay_ms: 10 },
    InitStep { command: DISPON, data: &[], delay_ms: 10 },
];

/// ST7789 on SPI0 with software-driven CS and DC.
pub struct St7789<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> St7789<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs }
    }

    /// Run the power-up sequence and address the whole panel.
    pub async fn init(&mut self) {
        for step in &INIT_SEQUENCE {
            self.write_command(step.command).await;
            if !step.data.is_empty() {
                self.write_data(step.data).await;
            }
            if step.delay_ms > 0 {
                Timer::after_millis(step.delay_ms).await;
            }
        }

        // Every flush covers the full panel, so the window is set once
        self.set_window(0, 0, SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
            .await;
        debug!("ST7789 ready, {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);
    }

    /// Send a command byte (DC low, CS low during transfer).
    async fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    async fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let [x0_hi, x0_lo] = x.to_be_bytes();
        let [x1_hi, x1_lo] = (x + w - 1).to_be_bytes();
        let [y0_hi, y0_lo] = y.to_be_bytes();
        let [y1_hi, y1_lo] = (y + h - 1).to_be_bytes();

        self.write_command(CASET).await;
        self.write_data(&[x0_hi, x0_lo, x1_hi, x1_lo]).await;
        self.write_command(RASET).await;
        self.write_data(&[y0_hi, y0_lo, y1_hi, y1_lo]).await;
    }

    /// Stream a full frame (big-endian RGB565) to panel RAM.
    pub async fn flush(
        &mut self,
        frame: &[u8],
    ) {
        // RAMWR then the frame with CS held low
        self.cs.set_low();
        self.dc.set_low();
        // Single byte: blocking is cheaper than a DMA setup
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(frame).await.ok();
        self.cs.set_high();
    }
}
