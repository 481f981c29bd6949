//! Power, system information and manufacturing interfaces

/// Manufacturing identity and console
pub mod mft;

/// Low-power modes and battery state
pub mod power;

use crate::config::BatteryConfig;
use crate::hw::{SystemDriver, UNIQUE_ID_LEN};
use power::{BatteryLevel, PowerState};

/// System information used by the LoRaWAN stack
pub trait SystemInfo {
    /// Battery level in the DevStatusAns encoding (0 external, 255 unknown)
    fn get_battery_level(&mut self) -> u8;

    /// Write the hardware unique id into `id`
    fn get_unique_id(&self, id: &mut [u8; UNIQUE_ID_LEN]);

    /// Seed for the stack's pseudo random generator
    fn get_random_seed(&mut self) -> u32;

    /// Read and classify the battery level
    fn power_state(&mut self, config: &BatteryConfig) -> PowerState {
        BatteryLevel::from(self.get_battery_level()).power_state(config)
    }
}

/// [`SystemInfo`] implementation on top of a board system driver
pub struct BoardSystem<D: SystemDriver> {
    driver: D,
}

impl<D: SystemDriver> BoardSystem<D> {
    /// Wrap a system driver
    pub fn new(driver: D) -> Self {
        Self { driver }
    }
}

impl<D: SystemDriver> SystemInfo for BoardSystem<D> {
    fn get_battery_level(&mut self) -> u8 {
        self.driver.battery_level()
    }

    fn get_unique_id(&self, id: &mut [u8; UNIQUE_ID_LEN]) {
        self.driver.unique_id(id);
    }

    fn get_random_seed(&mut self) -> u32 {
        self.driver.random_seed()
    }
}
