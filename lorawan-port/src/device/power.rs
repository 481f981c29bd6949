//! Low-power modes and battery state
//!
//! This module provides:
//! - The [`PowerMode`] interface the stack uses to stop or sleep the MCU
//! - Forwarding to a board low-power driver
//! - A driver-free Cortex-M implementation (feature `cortex-m`)
//! - Battery level decoding and power state classification

use crate::config::BatteryConfig;
use crate::hw::LowPowerDriver;

/// Low-power mode interface used by the LoRaWAN stack
pub trait PowerMode {
    /// Enter stop mode until the next wake-up source fires
    fn enter_stop_mode(&mut self);

    /// Restore the run configuration after leaving stop mode
    fn exit_stop_mode(&mut self);

    /// Enter sleep mode until the next interrupt
    fn enter_sleep_mode(&mut self);
}

/// [`PowerMode`] implementation on top of a board low-power driver
pub struct LowPower<D: LowPowerDriver> {
    driver: D,
}

impl<D: LowPowerDriver> LowPower<D> {
    /// Wrap a low-power driver
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Borrow the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: LowPowerDriver> PowerMode for LowPower<D> {
    fn enter_stop_mode(&mut self) {
        self.driver.enter_stop_mode();
    }

    fn exit_stop_mode(&mut self) {
        self.driver.exit_stop_mode();
    }

    fn enter_sleep_mode(&mut self) {
        self.driver.enter_sleep_mode();
    }
}

/// [`PowerMode`] implementation using the Cortex-M system control block
///
/// Stop mode is the core's deep sleep; which clocks and regulators actually
/// stop is decided by the vendor power controller configuration.
#[cfg(all(feature = "cortex-m", target_arch = "arm"))]
pub struct CortexMLowPower {
    scb: cortex_m::peripheral::SCB,
}

#[cfg(all(feature = "cortex-m", target_arch = "arm"))]
impl CortexMLowPower {
    /// Take ownership of the system control block
    pub fn new(scb: cortex_m::peripheral::SCB) -> Self {
        Self { scb }
    }
}

#[cfg(all(feature = "cortex-m", target_arch = "arm"))]
impl PowerMode for CortexMLowPower {
    fn enter_stop_mode(&mut self) {
        self.scb.set_sleepdeep();
        cortex_m::asm::dsb();
        cortex_m::asm::wfi();
    }

    fn exit_stop_mode(&mut self) {
        self.scb.clear_sleepdeep();
    }

    fn enter_sleep_mode(&mut self) {
        self.scb.clear_sleepdeep();
        cortex_m::asm::dsb();
        cortex_m::asm::wfi();
    }
}

/// Battery level as reported in DevStatusAns
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    /// Powered from an external source
    External,
    /// Battery level from 1 (empty) to 254 (full)
    Level(u8),
    /// The device could not measure its battery
    Unknown,
}

impl From<u8> for BatteryLevel {
    fn from(raw: u8) -> Self {
        match raw {
            0 => BatteryLevel::External,
            255 => BatteryLevel::Unknown,
            level => BatteryLevel::Level(level),
        }
    }
}

impl BatteryLevel {
    /// Encode back to the DevStatusAns byte
    pub fn raw(self) -> u8 {
        match self {
            BatteryLevel::External => 0,
            BatteryLevel::Level(level) => level,
            BatteryLevel::Unknown => 255,
        }
    }

    /// Classify the level against the configured thresholds
    ///
    /// External power and unmeasurable batteries are treated as normal.
    pub fn power_state(self, config: &BatteryConfig) -> PowerState {
        match self {
            BatteryLevel::Level(level) if level <= config.critical_threshold => {
                PowerState::Critical
            }
            BatteryLevel::Level(level) if level <= config.low_threshold => PowerState::PowerSaving,
            _ => PowerState::Normal,
        }
    }
}

/// Power consumption states
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Normal operation
    Normal,
    /// Power saving mode
    PowerSaving,
    /// Critical battery level
    Critical,
}
