//! Tick timer emulation.
//!
//! Watch hosts deliver a tick at most once per second together with a
//! bitmask of the time units that changed. Neither the simulator nor the
//! firmware has such a service, so [`TickService`] builds it from polling
//! a clock: the host calls [`TickService::poll`] as often as it likes and
//! gets a mask back only when a subscribed unit actually changed.

use core::ops::{BitOr, BitOrAssign};

use crate::time::ClockTime;

/// Set of time units that changed since the previous tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: Self = Self(0);
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    /// Day rollover (hour went from 23 back to 0, or the clock was set back).
    pub const DAY: Self = Self(1 << 3);

    #[inline]
    pub const fn bits(self) -> u8 { self.0 }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    /// True if every unit in `other` is also in `self`.
    #[inline]
    pub const fn contains(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any unit in `other` is in `self`.
    #[inline]
    pub const fn intersects(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    /// Units that changed between two readings.
    ///
    /// A change in a coarser unit implies the finer ones changed too: a new
    /// minute reports `MINUTE | SECOND` even if the second field happens to
    /// match, since the host would have ticked through it.
    pub const fn changed_between(
        previous: ClockTime,
        now: ClockTime,
    ) -> Self {
        let mut bits = 0;
        let day = now.seconds_of_day() < previous.seconds_of_day();
        let hour = day || now.hour() != previous.hour();
        let minute = hour || now.minute() != previous.minute();
        let second = minute || now.second() != previous.second();
        if second {
            bits |= Self::SECOND.0;
        }
        if minute {
            bits |= Self::MINUTE.0;
        }
        if hour {
            bits |= Self::HOUR.0;
        }
        if day {
            bits |= Self::DAY.0;
        }
        Self(bits)
    }
}

impl BitOr for TimeUnits {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(
        &mut self,
        rhs: Self,
    ) {
        *self = self.union(rhs);
    }
}

/// Polling tick service subscribed at one unit granularity.
///
/// Subscribing to `SECOND` reports every change; subscribing to `MINUTE`
/// reports only ticks that include a new minute, and so on.
#[derive(Clone, Debug)]
pub struct TickService {
    granularity: TimeUnits,
    last: Option<ClockTime>,
}

impl TickService {
    /// Subscribe at `granularity` (one of the single-unit constants).
    pub const fn subscribe(granularity: TimeUnits) -> Self {
        Self {
            granularity,
            last: None,
        }
    }

    /// Feed the current time. Returns the changed units when a tick is due.
    ///
    /// The first call only records the time. A late poll reports everything
    /// that changed since the last reported tick in one mask; missed ticks
    /// are not replayed.
    pub fn poll(
        &mut self,
        now: ClockTime,
    ) -> Option<TimeUnits> {
        let Some(previous) = self.last else {
            self.last = Some(now);
            return None;
        };

        let changed = TimeUnits::changed_between(previous, now);
        if !changed.intersects(self.granularity) {
            return None;
        }

        self.last = Some(now);
        Some(changed)
    }
}
