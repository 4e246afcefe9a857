//! Async edge watcher for embassy-style HALs.
//!
//! For targets without a raw ISR hook: an async task awaits GPIO edges and
//! feeds them to the state machine. Pair with [`EmbassyClock`](crate::clock::EmbassyClock)
//! and spawn one watcher per button.
//!
//! ```ignore
//! static BUTTON: StaticCell<Button<EmbassyClock>> = StaticCell::new();
//!
//! #[embassy_executor::task]
//! async fn button_task(btn: &'static Button<EmbassyClock>, mut pin: Input<'static>) {
//!     watch(btn, &mut pin).await;
//! }
//! ```

use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::button::{Button, Level};
use crate::clock::Clock;

/// Forward every raw edge of `pin` to `button` until the pin fails.
///
/// The level is re-read after each edge rather than inferred from the edge
/// direction, so a missed edge cannot leave the machine inverted.
pub async fn watch<P, C>(button: &Button<C>, pin: &mut P) -> !
where
    P: Wait + InputPin,
    C: Clock,
{
    #[cfg(feature = "defmt")]
    defmt::info!("button watcher started");

    loop {
        if pin.wait_for_any_edge().await.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("button pin wait failed");
            continue;
        }

        match pin.is_high() {
            Ok(raw_high) => button.on_pin_change(Level::from(raw_high)),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("button pin read failed");
            }
        }
    }
}
