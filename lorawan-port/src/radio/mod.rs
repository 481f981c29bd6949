/// Radio control over embedded-hal SPI and GPIO
pub mod spi;
/// Radio control interface
pub mod traits;

pub use spi::{RadioControlError, SpiRadioControl};
pub use traits::RadioControl;

use crate::timer::{Timer, TimerTime};

/// Time the reset line is held low
pub const RESET_PULSE_MS: TimerTime = 1;
/// Time the radio needs after reset release before it accepts commands
pub const RESET_SETTLE_MS: TimerTime = 6;

/// Run the radio power-on reset sequence
///
/// Drives the reset line low for [`RESET_PULSE_MS`], releases it and waits
/// [`RESET_SETTLE_MS`] for the radio to come up.
pub fn hardware_reset<R, T>(radio: &mut R, timer: &mut T) -> Result<(), R::Error>
where
    R: RadioControl,
    T: Timer,
{
    radio.reset()?;
    timer.delay_ms(RESET_PULSE_MS);
    radio.reset_cfg_input()?;
    timer.delay_ms(RESET_SETTLE_MS);
    Ok(())
}
