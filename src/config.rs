//! Construction options and timing defaults.
//!
//! All tunable timing parameters live here so they can be adjusted in one
//! place; `ButtonConfig::default()` reproduces the stock values.

use crate::error::Error;

/// Default debounce interval (ms). Raw edges closer together than this are
/// treated as contact bounce.
pub const DEFAULT_DEBOUNCE_MS: u64 = 30;

/// Default multi-click window (ms): maximum gap between consecutive presses
/// still counted as one run.
pub const DEFAULT_MULTI_CLICK_WINDOW_MS: u64 = 200;

/// Internal pull resistor direction. Determines the electrical idle level
/// and therefore which raw level means "pressed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Idle high, button shorts to ground: pressed = low.
    Up,
    /// Idle low, button shorts to supply: pressed = high.
    Down,
}

impl Pull {
    /// Raw level that reads as "pressed" for this wiring.
    pub(crate) fn active_high(self) -> bool {
        matches!(self, Pull::Down)
    }
}

impl core::str::FromStr for Pull {
    type Err = Error;

    /// Case-insensitive; anything but "up" or "down" is rejected rather than
    /// defaulted, since a wrong guess inverts the pressed polarity.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.eq_ignore_ascii_case("up") {
            Ok(Pull::Up)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Pull::Down)
        } else {
            Err(Error::InvalidPull)
        }
    }
}

/// Options for [`Button::new`](crate::Button::new).
#[derive(Clone, Copy)]
pub struct ButtonConfig {
    /// Minimum quiet time before a raw edge may commit a transition.
    pub debounce_ms: u64,
    /// Wiring of the button; selects the active level.
    pub pull: Pull,
    /// Maximum gap between presses of one multi-click run.
    pub multi_click_window_ms: u64,
    /// Invoked with the new logical state on every committed transition.
    /// Runs in the interrupt context that delivered the edge, so it must be
    /// short and non-blocking.
    pub on_change: Option<fn(pressed: bool)>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            pull: Pull::Up,
            multi_click_window_ms: DEFAULT_MULTI_CLICK_WINDOW_MS,
            on_change: None,
        }
    }
}
