//! Interrupt-safe button handle.
//!
//! [`Button`] wraps the pure state machine in a `critical_section` mutex so
//! the edge handler (interrupt context, sole writer of transitions) and the
//! polling queries (thread context, plus latch-clearing writes) never see a
//! half-committed transition: state, timestamps, latches and multi-click
//! counters move together or not at all.
//!
//! The pin itself stays with the caller. Construction borrows it once for
//! the initial synchronous read; after that the caller attaches
//! [`Button::on_pin_change`] to the pin's both-edges interrupt (or runs the
//! async watcher from the `watch` module).

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::ButtonConfig;
use crate::error::Error;
use crate::state::ButtonState;

/// Raw electrical level of the pin, as reported by the edge interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(is_high: bool) -> Self {
        if is_high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// One debounced button with press/release latches, hold timing and
/// multi-click counting.
///
/// All methods take `&self`; the handle is `Sync` (given a `Sync` clock) and
/// is normally stored in a `static` so the interrupt handler can reach it.
pub struct Button<C: Clock> {
    state: Mutex<RefCell<ButtonState>>,
    clock: C,
    on_change: Option<fn(bool)>,
}

impl<C: Clock> Button<C> {
    /// Set up the state machine with an initial synchronous read of `pin`.
    ///
    /// The caller keeps the pin: configure its pull to match `config.pull`
    /// before calling, and route its both-edges interrupt to
    /// [`on_pin_change`](Self::on_pin_change) afterwards.
    ///
    /// Fails with [`Error::PinRead`] when the read fails; the button must
    /// not be used in that case.
    pub fn new<P: InputPin + ?Sized>(
        pin: &mut P,
        clock: C,
        config: ButtonConfig,
    ) -> Result<Self, Error> {
        let raw_high = pin.is_high().map_err(|_| Error::PinRead)?;
        let now = clock.now_ms();

        let state = ButtonState::new(
            raw_high,
            config.pull.active_high(),
            config.debounce_ms,
            config.multi_click_window_ms,
            now,
        );

        Ok(Self {
            state: Mutex::new(RefCell::new(state)),
            clock,
            on_change: config.on_change,
        })
    }

    /// Edge handler: call on every raw rising or falling edge of the pin.
    ///
    /// Safe to call from interrupt context; the commit runs in a critical
    /// section and completes in bounded time. The change callback, if any,
    /// fires after the commit, outside the critical section but still in
    /// the calling context - keep it short and non-blocking.
    pub fn on_pin_change(&self, level: Level) {
        let now = self.clock.now_ms();
        let committed = critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).on_edge(level.is_high(), now)
        });

        if let Some(pressed) = committed {
            #[cfg(feature = "defmt")]
            defmt::debug!("button: pressed={=bool} at {=u64} ms", pressed, now);

            if let Some(cb) = self.on_change {
                cb(pressed);
            }
        }
    }

    /// Current debounced state. No side effects.
    pub fn is_pressed(&self) -> bool {
        critical_section::with(|cs| self.state.borrow_ref(cs).is_pressed())
    }

    /// True at most once per physical press, however often it is polled.
    pub fn was_pressed(&self) -> bool {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).take_pressed_event())
    }

    /// True at most once per physical release.
    pub fn was_released(&self) -> bool {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).take_released_event())
    }

    /// Milliseconds held: live and non-decreasing while pressed, frozen at
    /// the last completed press duration once released.
    pub fn hold_time(&self) -> u64 {
        let now = self.clock.now_ms();
        critical_section::with(|cs| self.state.borrow_ref(cs).hold_time(now))
    }

    /// Presses in the multi-click run currently in progress. Reads 0 before
    /// the first press and again once the window expires without another
    /// press.
    pub fn multi_click_count(&self) -> u32 {
        let now = self.clock.now_ms();
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).multi_click_count(now))
    }

    /// Click count of the last completed run; clears on read, so a polling
    /// consumer sees each run exactly once. 0 while no completed run is
    /// pending.
    pub fn multi_click_final(&self) -> u32 {
        let now = self.clock.now_ms();
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).take_multi_click_final(now))
    }

    /// Atomically drop both pending latches and all multi-click counts.
    /// Leaves the debounced state and the hold-time baseline alone.
    pub fn clear_events(&self) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).clear_events());
    }
}
