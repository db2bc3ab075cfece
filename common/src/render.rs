//! Redraw scheduling for the three ring layers.
//!
//! [`RedrawState`] keeps one dirty flag per ring plus a first-frame flag:
//!
//! | Event | Effect |
//! |-------|--------|
//! | Face created | All rings dirty, first frame pending |
//! | Tick with units | Rings whose unit is in the mask become dirty |
//! | Ring painted | That ring becomes clean |
//! | Frame finished | First-frame flag cleared |
//!
//! Ticks never clean a ring, so a delayed paint pass still sees every ring
//! that changed since the last one.

use crate::ring::RingKind;
use crate::tick::TimeUnits;

/// Number of ring layers on the face.
pub const RING_COUNT: usize = RingKind::ALL.len();

/// Tracks which rings need repainting.
#[derive(Clone, Debug)]
pub struct RedrawState {
    /// Dirty flag per ring, indexed by [`RingKind::index`].
    dirty: [bool; RING_COUNT],

    /// Whether this is the first frame (window background not painted yet).
    first_frame: bool,
}

impl RedrawState {
    /// Create a new state: everything dirty so the first paint is complete.
    pub const fn new() -> Self {
        Self {
            dirty: [true; RING_COUNT],
            first_frame: true,
        }
    }

    /// Mark the rings affected by a tick.
    ///
    /// Returns the number of rings that went from clean to dirty.
    pub fn handle_tick(
        &mut self,
        units: TimeUnits,
    ) -> usize {
        let mut newly_dirty = 0;
        for kind in RingKind::ALL {
            if units.contains(kind.unit()) && !self.dirty[kind.index()] {
                self.dirty[kind.index()] = true;
                newly_dirty += 1;
            }
        }
        newly_dirty
    }

    /// Mark one ring as painted.
    #[inline]
    pub fn mark_clean(
        &mut self,
        kind: RingKind,
    ) {
        self.dirty[kind.index()] = false;
    }

    #[inline]
    pub const fn is_dirty(
        &self,
        kind: RingKind,
    ) -> bool {
        self.dirty[kind.index()]
    }

    /// Whether anything has to be painted.
    #[inline]
    pub fn needs_redraw(&self) -> bool { self.first_frame || self.dirty.iter().any(|&d| d) }

    /// Bottom-most dirty ring, the first layer a paint pass must touch.
    pub fn lowest_dirty(&self) -> Option<RingKind> { RingKind::ALL.into_iter().find(|&kind| self.is_dirty(kind)) }

    /// Force a full repaint, window background included.
    pub fn invalidate(&mut self) {
        self.dirty = [true; RING_COUNT];
        self.first_frame = true;
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub fn end_frame(&mut self) { self.first_frame = false; }
}

impl Default for RedrawState {
    fn default() -> Self { Self::new() }
}
