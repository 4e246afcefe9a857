//! Injected time source.
//!
//! The state machine never reads the platform clock directly; it goes
//! through this trait so hosts can test with a scripted clock and targets
//! can plug in whatever monotonic counter they have.

/// Monotonic millisecond counter. Not required to be wall-clock accurate,
/// but must never go backwards.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// `embassy-time` backed clock for embassy targets.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}
