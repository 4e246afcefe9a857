//! Unified error type for the driver.
//!
//! We avoid `alloc` - all variants are fixed-size. Implements
//! `defmt::Format` when the `defmt` feature is enabled.
//!
//! Errors can only arise at construction time; the transition and query
//! paths are pure arithmetic over timestamps and cannot fail.

/// Errors surfaced by [`Button::new`](crate::Button::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Pull direction was not "up" or "down". Rejected rather than
    /// defaulted: guessing wrong inverts the pressed polarity.
    InvalidPull,

    /// The initial synchronous pin read failed; the button is unusable.
    PinRead,
}
