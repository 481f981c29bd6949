use heapless::Vec;

/// Maximum number of console baud rates a board can declare
pub const MAX_BAUD_RATES: usize = 8;

/// Baud rates of the reference board console
pub const STANDARD_BAUD_RATES: [u32; 5] = [9_600, 19_200, 38_400, 57_600, 115_200];

/// Battery thresholds on the LoRaWAN 1..=254 battery scale
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryConfig {
    /// At or below this level the device is critical
    pub critical_threshold: u8,
    /// At or below this level the device saves power
    pub low_threshold: u8,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            critical_threshold: 10,
            low_threshold: 30,
        }
    }
}

/// Manufacturing console configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    supported: Vec<u32, MAX_BAUD_RATES>,
    default_baud: u32,
}

impl ConsoleConfig {
    /// Create a console configuration
    ///
    /// Returns `None` when more than [`MAX_BAUD_RATES`] rates are given or
    /// `default_baud` is not one of them.
    pub fn new(supported: &[u32], default_baud: u32) -> Option<Self> {
        let supported = Vec::from_slice(supported).ok()?;
        if !supported.contains(&default_baud) {
            return None;
        }
        Some(Self {
            supported,
            default_baud,
        })
    }

    /// Whether the console can run at `baud`
    pub fn supports(&self, baud: u32) -> bool {
        self.supported.contains(&baud)
    }

    /// Baud rate after reset
    pub fn default_baud(&self) -> u32 {
        self.default_baud
    }

    /// All supported baud rates
    pub fn supported(&self) -> &[u32] {
        &self.supported
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            supported: Vec::from_slice(&STANDARD_BAUD_RATES).unwrap_or_default(),
            default_baud: 115_200,
        }
    }
}
