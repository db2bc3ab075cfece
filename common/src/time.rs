//! Wall-clock snapshot and the source it is read from.
//!
//! The face never caches time: every ring draw asks its [`TimeSource`] for a
//! fresh [`ClockTime`]. Hosts provide the source (chrono local time in the
//! simulator, a software clock on the firmware).

/// Seconds in one day, the period of [`ClockTime::from_seconds_of_day`].
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Hours, minutes and seconds of local time.
///
/// Fields are always in range (`hour < 24`, `minute < 60`, `second < 60`);
/// both constructors enforce it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// Midnight, 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a time from its fields, or `None` if any is out of range.
    pub const fn from_hms(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self { hour, minute, second })
        } else {
            None
        }
    }

    /// Build a time from seconds since midnight, wrapping every 24 hours.
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    /// Seconds elapsed since midnight.
    pub const fn seconds_of_day(self) -> u32 { self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32 }

    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(self) -> u8 { self.minute }

    #[inline]
    pub const fn second(self) -> u8 { self.second }
}

/// Host-provided wall clock.
pub trait TimeSource {
    /// Read the current local time.
    fn now(&self) -> ClockTime;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> ClockTime { (**self).now() }
}

/// A clock that always reads the same time. Useful for previews and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedTime(pub ClockTime);

impl TimeSource for FixedTime {
    fn now(&self) -> ClockTime { self.0 }
}

/// Parse `"HH:MM:SS"` (or `"HH:MM"`, seconds default to zero).
///
/// Returns `None` for anything else, including out-of-range fields.
pub fn parse_hms(text: &str) -> Option<ClockTime> {
    let mut parts = text.trim().split(':');
    let hour = parse_field(parts.next()?)?;
    let minute = parse_field(parts.next()?)?;
    let second = match parts.next() {
        Some(field) => parse_field(field)?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    ClockTime::from_hms(hour, minute, second)
}

/// One or two ASCII digits.
fn parse_field(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
