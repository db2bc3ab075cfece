//! The polar clock face: three stacked rings owned as one unit.
//!
//! [`PolarFace`] is created when the face becomes active, sized to the
//! display, and dropped when it is torn down. It owns the rings (and so their
//! wedge stencils), the redraw state and its per-second tick subscription;
//! nothing lives in globals, and dropping the face ends the subscription.
//!
//! A host feeds wall-clock readings to [`PolarFace::poll`] as often as it
//! likes and calls [`PolarFace::render`] whenever
//! [`PolarFace::needs_redraw`] says so.
//!
//! # Paint pass
//!
//! Rings are layers painted bottom to top: seconds, minutes, hours. A ring
//! repaints its whole base disc, which covers the rings stacked above it, so
//! a paint pass starts at the lowest dirty ring and repaints every layer
//! above it as well. In practice the seconds ring is dirty on every tick and
//! the whole face is repainted once per second.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::FACE_BACKGROUND;
use crate::config::{FaceConfig, HourMode, RING_STACK};
use crate::fmt::{debug, info, trace};
use crate::render::{RING_COUNT, RedrawState};
use crate::ring::{Ring, RingKind};
use crate::tick::{TickService, TimeUnits};
use crate::time::{ClockTime, TimeSource};

/// Summary of one paint pass.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaintReport {
    /// Window background was cleared first.
    pub cleared: bool,
    /// Number of rings repainted.
    pub rings: u8,
}

impl PaintReport {
    /// Whether anything reached the target.
    #[inline]
    pub const fn painted(&self) -> bool { self.cleared || self.rings > 0 }
}

/// Three-ring polar clock face.
#[derive(Clone, Debug)]
pub struct PolarFace {
    config: FaceConfig,
    bounds: Rectangle,
    /// Paint order, bottom first.
    rings: [Ring; RING_COUNT],
    state: RedrawState,
    ticks: TickService,
}

impl PolarFace {
    /// Build the face for a display area.
    ///
    /// Every wedge is anchored at the center of `bounds` and all rings start
    /// dirty, so the first [`render`](Self::render) paints everything. The
    /// face subscribes to second ticks here.
    pub fn new(
        bounds: Rectangle,
        config: FaceConfig,
    ) -> Self {
        let rings = RING_STACK.map(|spec| Ring::new(spec, bounds));
        info!("Face created, hour mode {:?}", config.hour_mode);
        Self {
            config,
            bounds,
            rings,
            state: RedrawState::new(),
            ticks: TickService::subscribe(TimeUnits::SECOND),
        }
    }

    /// Build the face covering a whole draw target.
    pub fn for_display<D>(
        display: &D,
        config: FaceConfig,
    ) -> Self
    where
        D: Dimensions,
    {
        Self::new(display.bounding_box(), config)
    }

    #[inline]
    pub const fn hour_mode(&self) -> HourMode { self.config.hour_mode }

    #[inline]
    pub const fn rings(&self) -> &[Ring; RING_COUNT] { &self.rings }

    /// Feed a wall-clock reading to the tick subscription.
    ///
    /// Marks the affected rings and returns the changed units when a tick is
    /// due. The first reading only starts the subscription.
    pub fn poll(
        &mut self,
        now: ClockTime,
    ) -> Option<TimeUnits> {
        let units = self.ticks.poll(now)?;
        self.handle_tick(units);
        Some(units)
    }

    /// Tick callback: mark the rings whose unit changed.
    pub fn handle_tick(
        &mut self,
        units: TimeUnits,
    ) {
        let newly_dirty = self.state.handle_tick(units);
        trace!("Tick {:?}, {} ring(s) dirtied", units, newly_dirty);
    }

    /// Whether the next [`render`](Self::render) would paint anything.
    #[inline]
    pub fn needs_redraw(&self) -> bool { self.state.needs_redraw() }

    /// Force a complete repaint on the next pass.
    pub fn invalidate(&mut self) { self.state.invalidate(); }

    /// Paint pass: repaint dirty rings (and the layers above them).
    ///
    /// Each ring reads the time from `clock` itself when it is drawn.
    pub fn render<D, T>(
        &mut self,
        display: &mut D,
        clock: &T,
    ) -> Result<PaintReport, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        T: TimeSource + ?Sized,
    {
        let mut report = PaintReport::default();

        if self.state.is_first_frame() {
            display.fill_solid(&self.bounds, FACE_BACKGROUND)?;
            report.cleared = true;
        }

        if let Some(lowest) = self.state.lowest_dirty() {
            let mode = self.config.hour_mode;
            let mut area = display.clipped(&self.bounds);
            for ring in &mut self.rings[lowest.index()..] {
                let angle = ring.draw(&mut area, clock, mode)?;
                self.state.mark_clean(ring.kind());
                report.rings += 1;
                debug!("Painted {} ring at {} deg", ring.kind().label(), angle);
            }
        }

        self.state.end_frame();
        Ok(report)
    }

    /// Whether `kind` is waiting for the next paint pass.
    #[inline]
    pub const fn is_dirty(
        &self,
        kind: RingKind,
    ) -> bool {
        self.state.is_dirty(kind)
    }
}
