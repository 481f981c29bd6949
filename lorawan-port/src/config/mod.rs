//! Board configuration
//!
//! This module contains the tunables of a board port:
//! - RTC resolution, minimum alarm delay and crystal drift model
//! - Battery thresholds for power state classification
//! - Console baud rates supported by the manufacturing interface

/// Battery and console configuration
pub mod device;

/// RTC tick arithmetic
pub mod rtc;

pub use device::{BatteryConfig, ConsoleConfig};
pub use rtc::{CrystalDrift, RtcConfig, MAX_PREDIV_BITS};
