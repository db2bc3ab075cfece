//! Button handling for setting the clock.
//!
//! The PIM715 has four active-low buttons. The face is read-only, so they
//! only adjust the software clock:
//!
//! | Button | Action |
//! |--------|--------|
//! | X | Hour forward |
//! | Y | Minute forward |
//! | A | Full repaint |
//! | B | unused |

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// True only on the press edge.
    ///
    /// `is_low` is the raw pin level (low means pressed) sampled at uptime
    /// `now_ms`. Level changes within [`DEBOUNCE_MS`] of the previous
    /// accepted change are ignored.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }
        if let Some(last) = self.last_change_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change_ms = Some(now_ms);
        is_low
    }
}

/// What a button press asks the main loop to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClockAction {
    HourForward,
    MinuteForward,
    Repaint,
}

/// Debounce state for the three used buttons.
#[derive(Clone, Copy, Default, Debug)]
pub struct Buttons {
    hour: ButtonState,
    minute: ButtonState,
    repaint: ButtonState,
}

/// Raw pin levels of one sample, `true` when the pin reads low.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonLevels {
    pub x_low: bool,
    pub y_low: bool,
    pub a_low: bool,
}

impl Buttons {
    pub const fn new() -> Self {
        Self {
            hour: ButtonState::new(),
            minute: ButtonState::new(),
            repaint: ButtonState::new(),
        }
    }

    /// Feed one sample; yields the actions of buttons pressed since the last.
    pub fn poll(
        &mut self,
        levels: ButtonLevels,
        now_ms: u64,
    ) -> impl Iterator<Item = ClockAction> + use<> {
        let hour = self.hour.just_pressed(levels.x_low, now_ms);
        let minute = self.minute.just_pressed(levels.y_low, now_ms);
        let repaint = self.repaint.just_pressed(levels.a_low, now_ms);

        [
            (hour, ClockAction::HourForward),
            (minute, ClockAction::MinuteForward),
            (repaint, ClockAction::Repaint),
        ]
        .into_iter()
        .filter_map(|(pressed, action)| pressed.then_some(action))
    }
}
