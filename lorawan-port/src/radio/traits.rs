/// Radio control interface used by the LoRaWAN stack
///
/// Pin level access to the radio: the reset line, the SPI chip select (NSS)
/// and single word transfers on the SPI bus.
pub trait RadioControl {
    /// Error type for radio control operations
    type Error;

    /// Configure the reset line as an output and drive it low
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Configure the reset line as an input, releasing the radio from reset
    fn reset_cfg_input(&mut self) -> Result<(), Self::Error>;

    /// Select the radio (NSS low)
    fn rw_en(&mut self) -> Result<(), Self::Error>;

    /// Deselect the radio (NSS high)
    fn rw_dis(&mut self) -> Result<(), Self::Error>;

    /// Exchange one word on the SPI bus and return the received word
    fn rw(&mut self, tx_data: u16) -> Result<u16, Self::Error>;

    /// Exchange one word inside its own chip select window
    ///
    /// The radio is deselected even when the transfer fails.
    fn exchange(&mut self, tx_data: u16) -> Result<u16, Self::Error> {
        self.rw_en()?;
        let rx = self.rw(tx_data);
        self.rw_dis()?;
        rx
    }
}
