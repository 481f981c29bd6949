//! Board composition
//!
//! A board port is one implementation per capability, chosen at compile time
//! through the type parameters of [`Board`]. The LoRaWAN stack is written
//! against [`LoRaWanPort`] and never names the concrete drivers.

use crate::device::{mft::ManufacturingInfo, power::PowerMode, SystemInfo};
use crate::radio::{hardware_reset, RadioControl};
use crate::timer::Timer;

/// Hardware interfaces a LoRaWAN stack needs from a board
pub trait LoRaWanPort {
    /// Low-power mode implementation
    type Power: PowerMode;
    /// Time and timer implementation
    type Timer: Timer;
    /// Radio control implementation
    type Radio: RadioControl;
    /// System information implementation
    type System: SystemInfo;
    /// Manufacturing information implementation
    type Mft: ManufacturingInfo;

    /// Low-power modes
    fn power(&mut self) -> &mut Self::Power;

    /// Time and timer
    fn timer(&mut self) -> &mut Self::Timer;

    /// Radio control
    fn radio(&mut self) -> &mut Self::Radio;

    /// System information
    fn system(&mut self) -> &mut Self::System;

    /// Manufacturing information
    fn mft(&mut self) -> &mut Self::Mft;

    /// Reset the radio using the board timer for the pulse timing
    fn reset_radio(&mut self) -> Result<(), <Self::Radio as RadioControl>::Error>;
}

/// Board made of one implementation per capability
pub struct Board<P, T, R, S, M> {
    power: P,
    timer: T,
    radio: R,
    system: S,
    mft: M,
}

impl<P, T, R, S, M> Board<P, T, R, S, M>
where
    P: PowerMode,
    T: Timer,
    R: RadioControl,
    S: SystemInfo,
    M: ManufacturingInfo,
{
    /// Assemble a board
    pub fn new(power: P, timer: T, radio: R, system: S, mft: M) -> Self {
        Self {
            power,
            timer,
            radio,
            system,
            mft,
        }
    }

    /// Split the board back into its parts
    pub fn into_parts(self) -> (P, T, R, S, M) {
        (self.power, self.timer, self.radio, self.system, self.mft)
    }
}

impl<P, T, R, S, M> LoRaWanPort for Board<P, T, R, S, M>
where
    P: PowerMode,
    T: Timer,
    R: RadioControl,
    S: SystemInfo,
    M: ManufacturingInfo,
{
    type Power = P;
    type Timer = T;
    type Radio = R;
    type System = S;
    type Mft = M;

    fn power(&mut self) -> &mut P {
        &mut self.power
    }

    fn timer(&mut self) -> &mut T {
        &mut self.timer
    }

    fn radio(&mut self) -> &mut R {
        &mut self.radio
    }

    fn system(&mut self) -> &mut S {
        &mut self.system
    }

    fn mft(&mut self) -> &mut M {
        &mut self.mft
    }

    fn reset_radio(&mut self) -> Result<(), R::Error> {
        hardware_reset(&mut self.radio, &mut self.timer)
    }
}
