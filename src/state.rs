//! Pure button state machine - debounce, event latches, hold timing and
//! multi-click windowing.
//!
//! No hardware access: every method takes the current time explicitly, so the
//! whole machine is testable on the host with a scripted clock. The shared
//! wrapper in `button.rs` owns locking and the real clock.

/// Debounced state machine for one physical button.
///
/// Timestamps are monotonic milliseconds (`Clock::now_ms`). The machine has
/// two logical states, pressed and released; raw edges are filtered through
/// the debounce gate before they may commit a transition.
pub(crate) struct ButtonState {
    debounce_ms: u64,
    multi_click_window_ms: u64,
    /// Raw level that means "pressed" (low for pull-up wiring).
    active_high: bool,

    pressed: bool,
    /// Last time the raw level changed, accepted or not. Debounce gate.
    last_change: u64,
    /// Start of the current (or most recent) press.
    last_press: u64,
    /// End of the most recent completed press.
    last_release: u64,

    pressed_event: bool,
    released_event: bool,

    /// Presses in the open multi-click run; 0 while no run is open.
    click_count: u32,
    /// Count of the last closed run, until read.
    click_final: u32,
    run_open: bool,
}

impl ButtonState {
    /// `raw_high` is the synchronous pin read taken at construction.
    pub(crate) fn new(
        raw_high: bool,
        active_high: bool,
        debounce_ms: u64,
        multi_click_window_ms: u64,
        now: u64,
    ) -> Self {
        Self {
            debounce_ms,
            multi_click_window_ms,
            active_high,
            pressed: raw_high == active_high,
            last_change: now,
            last_press: now,
            last_release: now,
            pressed_event: false,
            released_event: false,
            click_count: 0,
            click_final: 0,
            run_open: false,
        }
    }

    /// Feed one raw edge. Returns `Some(new_state)` when a transition is
    /// committed, `None` when the edge is debounced away or reports the
    /// level we already hold.
    pub(crate) fn on_edge(&mut self, raw_high: bool, now: u64) -> Option<bool> {
        // Still inside the debounce window: drop the edge but rearm the
        // window, so a bouncing contact must go quiet before it can commit.
        if now.saturating_sub(self.last_change) < self.debounce_ms {
            self.last_change = now;
            return None;
        }

        let new_state = raw_high == self.active_high;
        if new_state == self.pressed {
            // Spurious interrupt reporting the level we already hold.
            return None;
        }

        self.pressed = new_state;
        self.last_change = now;

        if new_state {
            self.pressed_event = true;
            // Close the previous run first if its window already lapsed,
            // then either extend it or start a fresh one.
            self.expire_run(now);
            if self.run_open {
                self.click_count += 1;
            } else {
                self.run_open = true;
                self.click_count = 1;
            }
            self.last_press = now;
        } else {
            self.released_event = true;
            self.last_release = now;
        }

        Some(new_state)
    }

    pub(crate) fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Read-and-clear: true at most once per committed press.
    pub(crate) fn take_pressed_event(&mut self) -> bool {
        core::mem::take(&mut self.pressed_event)
    }

    /// Read-and-clear: true at most once per committed release.
    pub(crate) fn take_released_event(&mut self) -> bool {
        core::mem::take(&mut self.released_event)
    }

    /// Milliseconds the button has been held: live while pressed, frozen at
    /// the last completed press duration otherwise. 0 before the first press.
    pub(crate) fn hold_time(&self, now: u64) -> u64 {
        if self.pressed {
            now.saturating_sub(self.last_press)
        } else {
            self.last_release.saturating_sub(self.last_press)
        }
    }

    /// Presses in the in-progress run; 0 once the window has expired.
    pub(crate) fn multi_click_count(&mut self, now: u64) -> u32 {
        self.expire_run(now);
        self.click_count
    }

    /// Count of the last completed run; clears on read so each run is
    /// reported exactly once.
    pub(crate) fn take_multi_click_final(&mut self, now: u64) -> u32 {
        self.expire_run(now);
        core::mem::take(&mut self.click_final)
    }

    /// Drop all pending latches and multi-click bookkeeping. Current state
    /// and the hold-time baseline stay as they are.
    pub(crate) fn clear_events(&mut self) {
        self.pressed_event = false;
        self.released_event = false;
        self.click_count = 0;
        self.click_final = 0;
        self.run_open = false;
    }

    /// Close the open run once the gap since its last press exceeds the
    /// window. Runs lazily from the press path and the multi-click queries.
    fn expire_run(&mut self, now: u64) {
        if self.run_open && now.saturating_sub(self.last_press) > self.multi_click_window_ms {
            self.click_final = self.click_count;
            self.click_count = 0;
            self.run_open = false;
        }
    }
}
