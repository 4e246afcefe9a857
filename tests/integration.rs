//! Host integration tests driving the full `Button` handle with a scripted
//! clock and a fake pin.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use debounced_button::{Button, ButtonConfig, Clock, Error, Level, Pull};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

/// Scripted monotonic clock shared between the test and the button.
#[derive(Clone, Default)]
struct FakeClock(Arc<AtomicU64>);

impl FakeClock {
    fn set(&self, ms: u64) {
        self.0.store(ms, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Pin with a settable level, used only for the construction-time read.
struct FakePin {
    high: bool,
}

impl ErrorType for FakePin {
    type Error = core::convert::Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

/// Pin whose reads always fail.
struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Pull-up button, idle (raw high) at construction, default timing.
fn idle_button(clock: &FakeClock) -> Button<FakeClock> {
    let mut pin = FakePin { high: true };
    Button::new(&mut pin, clock.clone(), ButtonConfig::default()).unwrap()
}

#[test]
fn pull_up_low_pin_is_pressed_at_construction() {
    let clock = FakeClock::default();
    let mut pin = FakePin { high: false };
    let btn = Button::new(&mut pin, clock.clone(), ButtonConfig::default()).unwrap();

    assert!(btn.is_pressed());

    // Raw high after a full debounce interval: the release commits.
    clock.set(100);
    btn.on_pin_change(Level::High);
    assert!(btn.was_released());
    assert!(!btn.is_pressed());
}

#[test]
fn bouncing_contact_yields_one_transition() {
    let clock = FakeClock::default();
    let btn = idle_button(&clock);

    // Clean press at t=100.
    clock.set(100);
    btn.on_pin_change(Level::Low);
    assert!(btn.is_pressed());

    // Release bounce train: edges 5 ms apart keep rearming the window and
    // never reach the logical layer.
    for t in [110u64, 115, 120, 125] {
        clock.set(t);
        btn.on_pin_change(Level::High);
        assert!(btn.is_pressed());
    }
    assert!(!btn.was_released());

    // Quiet for a full window, then the release lands.
    clock.set(160);
    btn.on_pin_change(Level::High);
    assert!(!btn.is_pressed());
    assert!(btn.was_released());
}

#[test]
fn was_pressed_reports_each_press_once() {
    let clock = FakeClock::default();
    let btn = idle_button(&clock);

    clock.set(100);
    btn.on_pin_change(Level::Low);

    assert!(btn.was_pressed());
    assert!(!btn.was_pressed());

    // Polling is_pressed in between must not re-arm the latch.
    assert!(btn.is_pressed());
    assert!(!btn.was_pressed());
}

#[test]
fn hold_time_is_monotonic_then_freezes() {
    let clock = FakeClock::default();
    let btn = idle_button(&clock);

    clock.set(1_000);
    btn.on_pin_change(Level::Low);

    let mut prev = 0;
    for t in [1_050u64, 1_200, 1_500] {
        clock.set(t);
        let h = btn.hold_time();
        assert!(h >= prev);
        prev = h;
    }

    clock.set(1_800);
    btn.on_pin_change(Level::High);
    assert_eq!(btn.hold_time(), 800);

    // Frozen until the next press.
    clock.set(10_000);
    assert_eq!(btn.hold_time(), 800);
}

#[test]
fn multi_click_run_counts_and_finalizes() {
    let clock = FakeClock::default();
    let btn = idle_button(&clock);

    // Presses at 40(+release 80), 190(+230), 360(+400): gaps 150 and 170.
    let mut expected = 1;
    for (down, up) in [(40u64, 80u64), (190, 230), (360, 400)] {
        clock.set(down);
        btn.on_pin_change(Level::Low);
        assert_eq!(btn.multi_click_count(), expected);
        expected += 1;

        clock.set(up);
        btn.on_pin_change(Level::High);
    }

    // 4th press at 640: gap 280 > 200 closes the run at 3.
    clock.set(640);
    btn.on_pin_change(Level::Low);
    assert_eq!(btn.multi_click_count(), 1);
    assert_eq!(btn.multi_click_final(), 3);
    assert_eq!(btn.multi_click_final(), 0);
}

#[test]
fn expired_run_is_reported_without_another_press() {
    let clock = FakeClock::default();
    let btn = idle_button(&clock);

    // Double click.
    for (down, up) in [(40u64, 80u64), (150, 190)] {
        clock.set(down);
        btn.on_pin_change(Level::Low);
        clock.set(up);
        btn.on_pin_change(Level::High);
    }

    // Window around the last press lapses silently at 150 + 200.
    clock.set(400);
    assert_eq!(btn.multi_click_count(), 0);
    assert_eq!(btn.multi_click_final(), 2);
    assert_eq!(btn.multi_click_final(), 0);
}

#[test]
fn clear_events_drops_latches_but_not_state() {
    let clock = FakeClock::default();
    let btn = idle_button(&clock);

    clock.set(100);
    btn.on_pin_change(Level::Low);

    btn.clear_events();

    assert!(!btn.was_pressed());
    assert!(!btn.was_released());
    assert_eq!(btn.multi_click_count(), 0);
    assert_eq!(btn.multi_click_final(), 0);

    // Debounced state and hold baseline survive.
    assert!(btn.is_pressed());
    clock.set(350);
    assert_eq!(btn.hold_time(), 250);
}

static CALLBACK_PRESSES: AtomicUsize = AtomicUsize::new(0);
static CALLBACK_RELEASES: AtomicUsize = AtomicUsize::new(0);

fn count_transitions(pressed: bool) {
    if pressed {
        CALLBACK_PRESSES.fetch_add(1, Ordering::SeqCst);
    } else {
        CALLBACK_RELEASES.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn callback_fires_only_on_committed_transitions() {
    let clock = FakeClock::default();
    let mut pin = FakePin { high: true };
    let btn = Button::new(
        &mut pin,
        clock.clone(),
        ButtonConfig {
            on_change: Some(count_transitions),
            ..Default::default()
        },
    )
    .unwrap();

    clock.set(100);
    btn.on_pin_change(Level::Low);

    // Bounce inside the window: no callback.
    clock.set(110);
    btn.on_pin_change(Level::High);

    clock.set(200);
    btn.on_pin_change(Level::High);

    assert_eq!(CALLBACK_PRESSES.load(Ordering::SeqCst), 1);
    assert_eq!(CALLBACK_RELEASES.load(Ordering::SeqCst), 1);
}

#[test]
fn pull_down_wiring_from_parsed_config() {
    let clock = FakeClock::default();
    let mut pin = FakePin { high: false };
    let btn = Button::new(
        &mut pin,
        clock.clone(),
        ButtonConfig {
            pull: "DOWN".parse::<Pull>().unwrap(),
            ..Default::default()
        },
    )
    .unwrap();

    // Pull-down idles low: not pressed.
    assert!(!btn.is_pressed());

    clock.set(100);
    btn.on_pin_change(Level::High);
    assert!(btn.is_pressed());
    assert!(btn.was_pressed());
}

#[test]
fn failing_pin_read_rejects_construction() {
    let clock = FakeClock::default();
    let result = Button::new(&mut BrokenPin, clock, ButtonConfig::default());
    assert!(matches!(result, Err(Error::PinRead)));
}
