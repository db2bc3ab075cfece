//! Ring renderer.
//!
//! One [`Ring`] type serves all three rings; only the [`RingSpec`] differs.
//! Drawing a ring paints, around the center of its layer bounds:
//!
//! 1. a light base disc of `outer_radius`
//! 2. dark wedges from the current angle up to (not including) 355°
//! 3. a dark inner disc of `outer_radius - band_width`
//!
//! What remains visible is a band of `band_width` pixels that is light over
//! the elapsed arc and dark over the remaining one. At angle 0 the whole band
//! is dark; at 354° only the last step is dark.

use core::ops::Range;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use crate::angle::{self, DEGREES_PER_STEP};
use crate::colors::{RING_DARK, RING_LIGHT};
use crate::config::HourMode;
use crate::tick::TimeUnits;
use crate::time::{ClockTime, TimeSource};
use crate::wedge::{SegmentWedge, WedgeGeometry};

/// Wedges are drawn while the angle is below this bound.
pub const WEDGE_LIMIT: u16 = 355;

/// Which time unit a ring shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingKind {
    Second,
    Minute,
    Hour,
}

impl RingKind {
    /// All kinds in paint order (bottom to top).
    pub const ALL: [Self; 3] = [Self::Second, Self::Minute, Self::Hour];

    /// Layer position, 0 is the bottom.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Second => 0,
            Self::Minute => 1,
            Self::Hour => 2,
        }
    }

    /// Tick unit whose change dirties this ring.
    pub const fn unit(self) -> TimeUnits {
        match self {
            Self::Second => TimeUnits::SECOND,
            Self::Minute => TimeUnits::MINUTE,
            Self::Hour => TimeUnits::HOUR,
        }
    }

    /// Quantized angle of this ring at `time`.
    pub const fn angle(
        self,
        time: ClockTime,
        mode: HourMode,
    ) -> u16 {
        match self {
            Self::Second => angle::second_angle(time),
            Self::Minute => angle::minute_angle(time),
            Self::Hour => angle::hour_angle(time, mode),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
        }
    }
}

/// Static description of one ring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingSpec {
    pub kind: RingKind,
    /// Radius of the light base disc.
    pub outer_radius: u32,
    /// Visible band width; the inner erase disc has `outer_radius - band_width`.
    pub band_width: u32,
    /// Stencil for one 6° segment.
    pub wedge: WedgeGeometry,
}

impl RingSpec {
    /// Radius of the inner erase disc.
    #[inline]
    pub const fn inner_radius(&self) -> u32 { self.outer_radius.saturating_sub(self.band_width) }
}

/// Angles at which wedges are drawn for a ring currently at `start`.
///
/// `start, start + 6, ...` while below [`WEDGE_LIMIT`]. Empty when
/// `start >= 355`; exactly `[354]` when `start == 354`.
pub fn wedge_angles(start: u16) -> core::iter::StepBy<Range<u16>> {
    (start.min(WEDGE_LIMIT)..WEDGE_LIMIT).step_by(usize::from(DEGREES_PER_STEP))
}

/// Center of a rectangle, rounding towards the top-left.
#[inline]
pub const fn center_of(bounds: &Rectangle) -> Point {
    Point::new(
        bounds.top_left.x + (bounds.size.width / 2) as i32,
        bounds.top_left.y + (bounds.size.height / 2) as i32,
    )
}

/// A drawable ring layer with its own wedge stencil.
#[derive(Clone, Debug)]
pub struct Ring {
    spec: RingSpec,
    /// Layer area; the ring is centered in it.
    bounds: Rectangle,
    wedge: SegmentWedge,
}

impl Ring {
    /// Create a ring layer covering `bounds`, wedge anchored at its center.
    pub fn new(
        spec: RingSpec,
        bounds: Rectangle,
    ) -> Self {
        let mut wedge = SegmentWedge::new(spec.wedge);
        wedge.move_to(center_of(&bounds));
        Self { spec, bounds, wedge }
    }

    #[inline]
    pub const fn kind(&self) -> RingKind { self.spec.kind }

    #[inline]
    pub const fn wedge(&self) -> &SegmentWedge { &self.wedge }

    /// Draw the ring for the time read from `clock` right now.
    ///
    /// Returns the angle that was drawn.
    pub fn draw<D, T>(
        &mut self,
        display: &mut D,
        clock: &T,
        mode: HourMode,
    ) -> Result<u16, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        T: TimeSource + ?Sized,
    {
        let angle = self.spec.kind.angle(clock.now(), mode);
        self.draw_at(display, angle)?;
        Ok(angle)
    }

    /// Draw the ring at a given quantized angle.
    pub fn draw_at<D>(
        &mut self,
        display: &mut D,
        angle: u16,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let center = center_of(&self.bounds);

        fill_disc(display, center, self.spec.outer_radius, RING_LIGHT)?;

        for degrees in wedge_angles(angle) {
            self.wedge.rotate_to(degrees);
            self.wedge.draw_filled(display, RING_DARK)?;
        }

        fill_disc(display, center, self.spec.inner_radius(), RING_DARK)
    }
}

/// Filled disc covering every pixel within `radius` of `center`.
fn fill_disc<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, 2 * radius + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HOUR_RING, MINUTE_RING, SECOND_RING};
    use crate::framebuffer::{FrameBuffer, buffer_len};
    use crate::time::FixedTime;

    // Pebble watch resolution
    const W: usize = 144;
    const H: usize = 168;
    const CENTER: Point = Point::new(72, 84);

    fn layer() -> Rectangle { Rectangle::new(Point::zero(), Size::new(W as u32, H as u32)) }

    fn render(
        spec: RingSpec,
        angle: u16,
    ) -> Vec<u8> {
        let mut buf = vec![0u8; buffer_len(W, H)];
        let mut fb = FrameBuffer::new(&mut buf, W, H).unwrap();
        let mut ring = Ring::new(spec, layer());
        ring.draw_at(&mut fb, angle).ok();
        buf
    }

    fn pixel_at(
        buf: &mut [u8],
        p: Point,
    ) -> Rgb565 {
        FrameBuffer::new(buf, W, H).unwrap().pixel(p).unwrap()
    }

    /// Point on the circle of `radius` at `degrees` clockwise from 12 o'clock.
    fn polar(
        radius: f32,
        degrees: f32,
    ) -> Point {
        let rad = degrees.to_radians();
        CENTER + Point::new((radius * rad.sin()).round() as i32, (-radius * rad.cos()).round() as i32)
    }

    #[test]
    fn test_wedge_angles_full_turn() {
        let angles: Vec<u16> = wedge_angles(0).collect();
        assert_eq!(angles.len(), 60);
        assert_eq!(angles.first(), Some(&0));
        assert_eq!(angles.last(), Some(&354));
    }

    #[test]
    fn test_wedge_angles_boundary() {
        assert_eq!(wedge_angles(354).collect::<Vec<_>>(), vec![354]);
        assert_eq!(wedge_angles(348).collect::<Vec<_>>(), vec![348, 354]);
        assert_eq!(wedge_angles(355).count(), 0);
        assert_eq!(wedge_angles(400).count(), 0);
    }

    #[test]
    fn test_wedge_angles_scenario() {
        // 03:15:30 -> seconds 180, minutes 90, hours 96
        for (start, count) in [(180, 30), (90, 45), (96, 44)] {
            let angles: Vec<u16> = wedge_angles(start).collect();
            assert_eq!(angles.len(), count, "start {start}");
            assert!(angles.windows(2).all(|w| w[1] - w[0] == 6));
            assert!(angles.iter().all(|&a| a < WEDGE_LIMIT));
        }
    }

    #[test]
    fn test_center_of_bounds() {
        let bounds = Rectangle::new(Point::zero(), Size::new(144, 168));
        assert_eq!(center_of(&bounds), CENTER);
        let offset = Rectangle::new(Point::new(10, 20), Size::new(5, 5));
        assert_eq!(center_of(&offset), Point::new(12, 22));
    }

    #[test]
    fn test_kind_units_and_indices() {
        for (i, kind) in RingKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(RingKind::Second.unit(), TimeUnits::SECOND);
        assert_eq!(RingKind::Minute.unit(), TimeUnits::MINUTE);
        assert_eq!(RingKind::Hour.unit(), TimeUnits::HOUR);
    }

    #[test]
    fn test_half_elapsed_seconds_ring() {
        let mut buf = render(SECOND_RING, 180);
        let band = 63.0;

        // Elapsed half (right side) stays light
        for deg in [30.0, 90.0, 150.0] {
            assert_eq!(pixel_at(&mut buf, polar(band, deg)), RING_LIGHT, "{deg}°");
        }
        // Remaining half (left side) is covered by wedges
        for deg in [200.0, 270.0, 340.0] {
            assert_eq!(pixel_at(&mut buf, polar(band, deg)), RING_DARK, "{deg}°");
        }
    }

    #[test]
    fn test_inner_disc_erased() {
        let mut buf = render(SECOND_RING, 354);
        assert_eq!(pixel_at(&mut buf, CENTER), RING_DARK);
        assert_eq!(pixel_at(&mut buf, polar(SECOND_RING.inner_radius() as f32 - 2.0, 90.0)), RING_DARK);
    }

    #[test]
    fn test_angle_zero_band_fully_dark() {
        let mut buf = render(MINUTE_RING, 0);
        for deg in (0..360).step_by(15) {
            assert_eq!(pixel_at(&mut buf, polar(53.0, deg as f32)), RING_DARK, "{deg}°");
        }
    }

    #[test]
    fn test_last_step_only_one_dark_wedge() {
        let mut buf = render(HOUR_RING, 354);
        // Light almost everywhere in the band
        for deg in [6.0, 90.0, 180.0, 270.0, 340.0] {
            assert_eq!(pixel_at(&mut buf, polar(43.0, deg)), RING_LIGHT, "{deg}°");
        }
        // Dark just before 12 o'clock
        assert_eq!(pixel_at(&mut buf, polar(43.0, 355.0)), RING_DARK);
    }

    #[test]
    fn test_outside_ring_untouched() {
        let mut buf = render(HOUR_RING, 90);
        // Beyond the wedge tips nothing is drawn
        assert_eq!(pixel_at(&mut buf, polar(60.0, 45.0)), Rgb565::BLACK);
        assert_eq!(pixel_at(&mut buf, Point::new(0, 0)), Rgb565::BLACK);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut buf = vec![0u8; buffer_len(W, H)];
        let mut fb = FrameBuffer::new(&mut buf, W, H).unwrap();
        let mut ring = Ring::new(SECOND_RING, layer());

        ring.draw_at(&mut fb, 96).ok();
        let first = fb.as_bytes().to_vec();
        ring.draw_at(&mut fb, 96).ok();
        assert_eq!(fb.as_bytes(), first.as_slice());
    }

    #[test]
    fn test_draw_reads_time_source() {
        let t = ClockTime::from_hms(3, 15, 30).unwrap();
        let clock = FixedTime(t);

        let mut buf = vec![0u8; buffer_len(W, H)];
        let mut fb = FrameBuffer::new(&mut buf, W, H).unwrap();

        let mut hours = Ring::new(HOUR_RING, layer());
        assert_eq!(hours.draw(&mut fb, &clock, HourMode::Twelve), Ok(96));
        let mut minutes = Ring::new(MINUTE_RING, layer());
        assert_eq!(minutes.draw(&mut fb, &clock, HourMode::Twelve), Ok(90));
        let mut seconds = Ring::new(SECOND_RING, layer());
        assert_eq!(seconds.draw(&mut fb, &clock, HourMode::Twelve), Ok(180));
    }

    #[test]
    fn test_last_wedge_rotation_left_on_stencil() {
        let mut buf = vec![0u8; buffer_len(W, H)];
        let mut fb = FrameBuffer::new(&mut buf, W, H).unwrap();
        let mut ring = Ring::new(SECOND_RING, layer());
        ring.draw_at(&mut fb, 180).ok();
        assert_eq!(ring.wedge().rotation(), 354);
        assert_eq!(ring.wedge().offset(), CENTER);
    }
}
