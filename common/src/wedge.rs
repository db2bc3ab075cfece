//! Triangular segment stencil.
//!
//! A wedge is a narrow triangle with its apex at the ring center and its
//! base just beyond the ring's outer edge. One wedge exists per ring and is
//! rotated to each segment angle and redrawn, instead of building a new
//! triangle for every segment.
//!
//! # Coordinates
//!
//! Points are defined relative to the apex with the base pointing up
//! (towards 12 o'clock, negative Y). Rotation is clockwise on screen, which
//! with Y pointing down is the standard rotation matrix:
//!
//! ```text
//! x' = x·cos(a) − y·sin(a)
//! y' = x·sin(a) + y·cos(a)
//! ```
//!
//! Rotated coordinates are rounded to the nearest pixel before the offset is
//! applied.

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

/// Size of a wedge stencil.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WedgeGeometry {
    /// Apex to base distance.
    pub length: u32,
    /// Half the base width.
    pub half_width: u32,
}

impl WedgeGeometry {
    /// Unrotated triangle points relative to the apex: apex, base left, base right.
    pub const fn points(self) -> [Point; 3] {
        let len = self.length as i32;
        let hw = self.half_width as i32;
        [Point::new(0, 0), Point::new(-hw, -len), Point::new(hw, -len)]
    }
}

/// A wedge placed on screen: geometry plus current rotation and offset.
#[derive(Clone, Debug)]
pub struct SegmentWedge {
    geometry: WedgeGeometry,
    rotation: u16,
    offset: Point,
    points: [Point; 3],
}

impl SegmentWedge {
    /// Create an unrotated wedge with its apex at the origin.
    pub const fn new(geometry: WedgeGeometry) -> Self {
        Self {
            geometry,
            rotation: 0,
            offset: Point::zero(),
            points: geometry.points(),
        }
    }

    /// Current rotation in degrees clockwise from 12 o'clock.
    #[inline]
    pub const fn rotation(&self) -> u16 { self.rotation }

    /// Current apex position.
    #[inline]
    pub const fn offset(&self) -> Point { self.offset }

    /// Move the apex to `offset`.
    pub fn move_to(
        &mut self,
        offset: Point,
    ) {
        self.offset = offset;
        self.update_points();
    }

    /// Rotate to an absolute angle in degrees, clockwise from 12 o'clock.
    pub fn rotate_to(
        &mut self,
        degrees: u16,
    ) {
        self.rotation = degrees % 360;
        self.update_points();
    }

    /// Triangle corners in screen coordinates: apex, then the two base corners.
    #[inline]
    pub const fn points(&self) -> [Point; 3] { self.points }

    /// Fill the wedge at its current rotation and offset.
    pub fn draw_filled<D>(
        &self,
        display: &mut D,
        color: Rgb565,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let [a, b, c] = self.points;
        Triangle::new(a, b, c)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
    }

    fn update_points(&mut self) {
        let radians = f32::from(self.rotation) * (PI / 180.0);
        let sin = micromath::F32(radians).sin().0;
        let cos = micromath::F32(radians).cos().0;

        let offset = self.offset;
        self.points = self.geometry.points().map(|p| {
            let (x, y) = (p.x as f32, p.y as f32);
            Point::new(to_pixel(x * cos - y * sin), to_pixel(x * sin + y * cos)) + offset
        });
    }
}

/// Nearest pixel coordinate, halves away from zero.
#[inline]
fn to_pixel(value: f32) -> i32 { micromath::F32(value).round().0 as i32 }

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND_WEDGE: WedgeGeometry = WedgeGeometry {
        length: 70,
        half_width: 7,
    };

    #[test]
    fn test_unrotated_points() {
        let wedge = SegmentWedge::new(SECOND_WEDGE);
        assert_eq!(wedge.points(), [Point::new(0, 0), Point::new(-7, -70), Point::new(7, -70)]);
    }

    #[test]
    fn test_move_to_translates_apex() {
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        wedge.move_to(Point::new(72, 84));
        assert_eq!(wedge.points(), [Point::new(72, 84), Point::new(65, 14), Point::new(79, 14)]);
    }

    #[test]
    fn test_rotate_quarter_turn_points_to_three_oclock() {
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        wedge.rotate_to(90);
        assert_eq!(wedge.points(), [Point::new(0, 0), Point::new(70, -7), Point::new(70, 7)]);
    }

    #[test]
    fn test_rotate_half_turn_points_down() {
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        wedge.rotate_to(180);
        assert_eq!(wedge.points(), [Point::new(0, 0), Point::new(7, 70), Point::new(-7, 70)]);
    }

    #[test]
    fn test_rotate_three_quarter_turn_points_to_nine_oclock() {
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        wedge.rotate_to(270);
        assert_eq!(wedge.points(), [Point::new(0, 0), Point::new(-70, 7), Point::new(-70, -7)]);
    }

    #[test]
    fn test_rotation_is_absolute() {
        let mut once = SegmentWedge::new(SECOND_WEDGE);
        once.rotate_to(120);

        let mut repeated = SegmentWedge::new(SECOND_WEDGE);
        repeated.rotate_to(42);
        repeated.rotate_to(120);

        assert_eq!(once.points(), repeated.points());
        assert_eq!(repeated.rotation(), 120);
    }

    #[test]
    fn test_rotate_keeps_offset() {
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        wedge.move_to(Point::new(10, 20));
        wedge.rotate_to(90);
        assert_eq!(wedge.offset(), Point::new(10, 20));
        assert_eq!(wedge.points()[0], Point::new(10, 20));
        assert_eq!(wedge.points()[1], Point::new(80, 13));
    }

    #[test]
    fn test_rotated_length_preserved() {
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        for deg in (0..360).step_by(6) {
            wedge.rotate_to(deg);
            let tip = wedge.points()[1];
            let dist_sq = tip.x * tip.x + tip.y * tip.y;
            // 70^2 + 7^2 = 4949, allow rounding slack
            assert!((dist_sq - 4949).abs() < 150, "deg {deg}: {dist_sq}");
        }
    }

    #[test]
    fn test_to_pixel_rounds_half_away_from_zero() {
        assert_eq!(to_pixel(0.4), 0);
        assert_eq!(to_pixel(0.5), 1);
        assert_eq!(to_pixel(-0.5), -1);
        assert_eq!(to_pixel(-69.99), -70);
    }

    #[test]
    fn test_rotate_eighth_turn_rounds_to_nearest_pixel() {
        // 63·cos45 = 44.55 and 77·cos45 = 54.45
        let mut wedge = SegmentWedge::new(SECOND_WEDGE);
        wedge.rotate_to(45);
        assert_eq!(wedge.points(), [Point::new(0, 0), Point::new(45, -54), Point::new(54, -45)]);
    }
}
