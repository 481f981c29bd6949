//! Manufacturing interface
//!
//! Factory-programmed identity of the board and the baud rate of the
//! manufacturing console.

use crate::config::ConsoleConfig;
use crate::hw::MftDriver;
use crate::log::{debug, error, info};

/// Factory identity of a board
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MftIdentity {
    /// Manufacturer id
    pub id: u32,
    /// Model number
    pub model: u32,
    /// Hardware revision
    pub revision: u32,
    /// Serial number
    pub serial: u32,
}

/// Manufacturing interface used by the LoRaWAN stack
pub trait ManufacturingInfo {
    /// Manufacturer id
    fn get_mft_id(&self) -> u32;

    /// Model number
    fn get_mft_model(&self) -> u32;

    /// Hardware revision
    fn get_mft_rev(&self) -> u32;

    /// Serial number
    fn get_mft_sn(&self) -> u32;

    /// Set the console baud rate
    ///
    /// Returns `true` on success and `false` if the rate is not supported.
    fn set_mft_baud(&mut self, baud: u32) -> bool;

    /// Current console baud rate
    fn get_mft_baud(&self) -> u32;

    /// Read all identity fields at once
    fn identity(&self) -> MftIdentity {
        MftIdentity {
            id: self.get_mft_id(),
            model: self.get_mft_model(),
            revision: self.get_mft_rev(),
            serial: self.get_mft_sn(),
        }
    }
}

/// [`ManufacturingInfo`] implementation on top of a board driver
pub struct BoardMft<D: MftDriver> {
    driver: D,
    console: Option<ConsoleConfig>,
}

impl<D: MftDriver> BoardMft<D> {
    /// Wrap a driver, leaving baud rate validation to it
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            console: None,
        }
    }

    /// Wrap a driver and reject rates missing from `console` before they
    /// reach it
    pub fn with_console(driver: D, console: ConsoleConfig) -> Self {
        Self {
            driver,
            console: Some(console),
        }
    }

    /// Borrow the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: MftDriver> ManufacturingInfo for BoardMft<D> {
    fn get_mft_id(&self) -> u32 {
        self.driver.mft_id()
    }

    fn get_mft_model(&self) -> u32 {
        self.driver.mft_model()
    }

    fn get_mft_rev(&self) -> u32 {
        self.driver.mft_rev()
    }

    fn get_mft_sn(&self) -> u32 {
        self.driver.mft_sn()
    }

    fn set_mft_baud(&mut self, baud: u32) -> bool {
        if let Some(console) = &self.console {
            if !console.supports(baud) {
                info!("console baud {} not supported", baud);
                return false;
            }
        }
        let accepted = self.driver.set_mft_baud(baud);
        if accepted {
            debug!("console baud set to {}", baud);
        } else {
            error!("driver rejected console baud {}", baud);
        }
        accepted
    }

    fn get_mft_baud(&self) -> u32 {
        self.driver.mft_baud()
    }
}
