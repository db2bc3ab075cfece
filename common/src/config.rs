//! Face configuration: hour mode and the ring geometry table.
//!
//! The geometry is the Pebble 144x168 watch layout. Each wedge reaches a
//! few pixels past its ring (`length > outer_radius`) and its half-width is
//! `length * tan(6°)` rounded, so neighbouring wedges overlap and leave no
//! seams at the ring edge.

use crate::ring::{RingKind, RingSpec};
use crate::wedge::WedgeGeometry;

// =============================================================================
// Hour Mode
// =============================================================================

/// How the hour ring maps the time of day onto a full turn.
///
/// The default is picked at build time by the `twenty-four-hour` feature.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourMode {
    /// One turn every 12 hours (30° per hour).
    #[cfg_attr(not(feature = "twenty-four-hour"), default)]
    Twelve,
    /// One turn every 24 hours (15° per hour).
    #[cfg_attr(feature = "twenty-four-hour", default)]
    TwentyFour,
}

/// Runtime options for a [`PolarFace`](crate::PolarFace).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    pub hour_mode: HourMode,
}

impl FaceConfig {
    pub const fn new(hour_mode: HourMode) -> Self { Self { hour_mode } }
}

// =============================================================================
// Ring Geometry
// =============================================================================

/// Width of the visible band of every ring, in pixels.
pub const BAND_WIDTH: u32 = 5;

/// Seconds ring, outermost and bottom layer.
pub const SECOND_RING: RingSpec = RingSpec {
    kind: RingKind::Second,
    outer_radius: 65,
    band_width: BAND_WIDTH,
    wedge: WedgeGeometry {
        length: 70,
        half_width: 7,
    },
};

/// Minutes ring.
pub const MINUTE_RING: RingSpec = RingSpec {
    kind: RingKind::Minute,
    outer_radius: 55,
    band_width: BAND_WIDTH,
    wedge: WedgeGeometry {
        length: 58,
        half_width: 6,
    },
};

/// Hours ring, innermost and top layer.
pub const HOUR_RING: RingSpec = RingSpec {
    kind: RingKind::Hour,
    outer_radius: 45,
    band_width: BAND_WIDTH,
    wedge: WedgeGeometry {
        length: 48,
        half_width: 5,
    },
};

/// All rings in paint order (bottom to top).
pub const RING_STACK: [RingSpec; 3] = [SECOND_RING, MINUTE_RING, HOUR_RING];

/// Smallest square the face fits in without clipping the outer wedges.
pub const MIN_FACE_SIZE: u32 = 2 * SECOND_RING.wedge.length + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_stack_order() {
        assert_eq!(RING_STACK[0].kind, RingKind::Second);
        assert_eq!(RING_STACK[1].kind, RingKind::Minute);
        assert_eq!(RING_STACK[2].kind, RingKind::Hour);
    }

    #[test]
    fn test_rings_nest_without_touching() {
        // Each ring's band sits fully inside the erase disc of the ring below
        for pair in RING_STACK.windows(2) {
            let (outer, inner) = (pair[0], pair[1]);
            assert!(inner.outer_radius < outer.inner_radius());
        }
    }

    #[test]
    fn test_wedges_overdraw_their_ring() {
        for spec in RING_STACK {
            assert!(spec.wedge.length > spec.outer_radius, "{:?} wedge too short", spec.kind);
        }
    }

    #[test]
    fn test_wedge_half_width_spans_six_degrees() {
        // half_width ~= length * tan(6°), rounded
        for spec in RING_STACK {
            let expected = (spec.wedge.length as f32 * 0.105_104_23 + 0.5) as u32;
            assert_eq!(spec.wedge.half_width, expected, "{:?}", spec.kind);
        }
    }

    #[test]
    fn test_hour_mode_default_follows_feature() {
        if cfg!(feature = "twenty-four-hour") {
            assert_eq!(HourMode::default(), HourMode::TwentyFour);
        } else {
            assert_eq!(HourMode::default(), HourMode::Twelve);
        }
        assert_eq!(FaceConfig::default().hour_mode, HourMode::default());
    }

    #[test]
    fn test_min_face_size() {
        assert_eq!(MIN_FACE_SIZE, 141);
        assert!(MIN_FACE_SIZE <= 144, "face must fit the Pebble width");
    }
}
