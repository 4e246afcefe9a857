//! Interrupt-driven GPIO button driver.
//!
//! Turns raw, bouncing pin edges into a clean logical state plus derived
//! events: press/release latches, hold duration and multi-click counts.
//! The core is hardware-free; the platform supplies two things through
//! narrow seams:
//!
//! - a pin implementing `embedded_hal::digital::InputPin` (pull configured
//!   by the caller, both-edges interrupt routed to
//!   [`Button::on_pin_change`]), and
//! - a monotonic millisecond [`Clock`].
//!
//! The edge handler is the sole writer of transitions and may preempt the
//! polling loop at any point, so every commit and every latch-clearing query
//! runs under a `critical-section` mutex.
//!
//! ```no_run
//! # use debounced_button::{Button, ButtonConfig, Clock, Pull};
//! # struct TickClock;
//! # impl Clock for TickClock { fn now_ms(&self) -> u64 { 0 } }
//! # fn demo<P: embedded_hal::digital::InputPin>(mut pin: P) -> Result<(), debounced_button::Error> {
//! let button = Button::new(&mut pin, TickClock, ButtonConfig {
//!     pull: Pull::Up,
//!     ..Default::default()
//! })?;
//! // ...attach button.on_pin_change to the pin's both-edges interrupt...
//!
//! loop {
//!     if button.was_pressed() {
//!         // toggle an LED, etc.
//!     }
//!     let clicks = button.multi_click_final();
//!     if clicks > 0 {
//!         // completed double/triple click
//!     }
//! #   break;
//! }
//! # Ok(()) }
//! ```
//!
//! Host tests run with `cargo test` (the `critical-section` std
//! implementation is pulled in as a dev-dependency); on embassy targets
//! enable the `embassy` feature for `EmbassyClock` and the async edge
//! watcher in the `watch` module.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod clock;
pub mod config;
pub mod error;
mod state;
#[cfg(feature = "embassy")]
pub mod watch;

pub use button::{Button, Level};
pub use clock::Clock;
#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
pub use config::{ButtonConfig, Pull, DEFAULT_DEBOUNCE_MS, DEFAULT_MULTI_CLICK_WINDOW_MS};
pub use error::Error;
