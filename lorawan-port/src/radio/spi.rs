use embedded_hal::{
    digital::v2::{InputPin, IoPin, OutputPin, PinState},
    spi::FullDuplex,
};

use crate::log::trace;
use crate::radio::traits::RadioControl;

/// Possible errors in radio control operations
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioControlError {
    /// SPI transfer error
    Spi,
    /// GPIO error
    Gpio,
    /// A previous reconfiguration of the reset line failed and consumed it
    ResetLineLost,
}

enum ResetLine<RI, RO> {
    Input(RI),
    Output(RO),
    Lost,
}

/// Radio control over `embedded-hal` SPI and GPIO
///
/// `RI` and `RO` are the input and output typestates of the reset pin; the
/// pin is switched between them with [`IoPin`].
pub struct SpiRadioControl<SPI, NSS, RI, RO>
where
    SPI: FullDuplex<u16>,
    NSS: OutputPin,
    RI: InputPin + IoPin<RI, RO>,
    RO: OutputPin + IoPin<RI, RO>,
{
    spi: SPI,
    nss: NSS,
    reset: ResetLine<RI, RO>,
}

impl<SPI, NSS, RI, RO> SpiRadioControl<SPI, NSS, RI, RO>
where
    SPI: FullDuplex<u16>,
    NSS: OutputPin,
    RI: InputPin + IoPin<RI, RO>,
    RO: OutputPin + IoPin<RI, RO>,
{
    /// Create radio control with the radio deselected and out of reset
    pub fn new(spi: SPI, mut nss: NSS, reset: RI) -> Result<Self, RadioControlError> {
        nss.set_high().map_err(|_| RadioControlError::Gpio)?;
        Ok(Self {
            spi,
            nss,
            reset: ResetLine::Input(reset),
        })
    }

    /// Whether the reset line is currently driven as an output
    pub fn is_reset_asserted(&self) -> bool {
        matches!(self.reset, ResetLine::Output(_))
    }
}

impl<SPI, NSS, RI, RO> RadioControl for SpiRadioControl<SPI, NSS, RI, RO>
where
    SPI: FullDuplex<u16>,
    NSS: OutputPin,
    RI: InputPin + IoPin<RI, RO>,
    RO: OutputPin + IoPin<RI, RO>,
{
    type Error = RadioControlError;

    fn reset(&mut self) -> Result<(), Self::Error> {
        // The level is applied as part of the mode switch, the line never
        // floats high in between.
        let pin = match core::mem::replace(&mut self.reset, ResetLine::Lost) {
            ResetLine::Input(pin) => pin
                .into_output_pin(PinState::Low)
                .map_err(|_| RadioControlError::Gpio)?,
            ResetLine::Output(pin) => pin
                .into_output_pin(PinState::Low)
                .map_err(|_| RadioControlError::Gpio)?,
            ResetLine::Lost => return Err(RadioControlError::ResetLineLost),
        };
        self.reset = ResetLine::Output(pin);
        trace!("radio reset asserted");
        Ok(())
    }

    fn reset_cfg_input(&mut self) -> Result<(), Self::Error> {
        let pin = match core::mem::replace(&mut self.reset, ResetLine::Lost) {
            ResetLine::Input(pin) => pin,
            ResetLine::Output(pin) => pin
                .into_input_pin()
                .map_err(|_| RadioControlError::Gpio)?,
            ResetLine::Lost => return Err(RadioControlError::ResetLineLost),
        };
        self.reset = ResetLine::Input(pin);
        trace!("radio reset released");
        Ok(())
    }

    fn rw_en(&mut self) -> Result<(), Self::Error> {
        self.nss.set_low().map_err(|_| RadioControlError::Gpio)
    }

    fn rw_dis(&mut self) -> Result<(), Self::Error> {
        self.nss.set_high().map_err(|_| RadioControlError::Gpio)
    }

    fn rw(&mut self, tx_data: u16) -> Result<u16, Self::Error> {
        nb::block!(self.spi.send(tx_data)).map_err(|_| RadioControlError::Spi)?;
        nb::block!(self.spi.read()).map_err(|_| RadioControlError::Spi)
    }
}
