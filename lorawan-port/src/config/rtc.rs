use crate::timer::{TimerTicks, TimerTime};

/// Crystal temperature drift model
///
/// A 32.768 kHz tuning fork crystal runs slow on both sides of its turnover
/// temperature, following a parabola of `coefficient` ppm/°C².
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalDrift {
    /// Parabolic drift coefficient in ppm/°C²
    pub coefficient: f32,
    /// Tolerance of the coefficient in ppm/°C²
    pub coefficient_dev: f32,
    /// Turnover temperature in °C
    pub turnover: f32,
    /// Tolerance of the turnover temperature in °C
    pub turnover_dev: f32,
}

impl Default for CrystalDrift {
    fn default() -> Self {
        Self {
            coefficient: -0.035,
            coefficient_dev: 0.0035,
            turnover: 25.0,
            turnover_dev: 5.0,
        }
    }
}

/// Widest synchronous prescaler accepted by [`RtcConfig::new`]
pub const MAX_PREDIV_BITS: u8 = 15;

/// RTC configuration and tick arithmetic
///
/// The RTC sub-second counter is prescaled to `2^prediv_bits` ticks per
/// second. Board RTC drivers use this to implement the conversions of
/// [`RtcDriver`](crate::hw::RtcDriver).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RtcConfig {
    prediv_bits: u8,
    /// Smallest alarm delay the RTC can honour, in ticks
    pub min_alarm_ticks: TimerTicks,
    /// Crystal drift model used for temperature compensation
    pub crystal: CrystalDrift,
}

impl Default for RtcConfig {
    fn default() -> Self {
        Self {
            prediv_bits: 10,
            min_alarm_ticks: 3,
            crystal: CrystalDrift::default(),
        }
    }
}

impl RtcConfig {
    /// Create an RTC configuration
    ///
    /// Returns `None` when `prediv_bits` is above [`MAX_PREDIV_BITS`].
    pub fn new(
        prediv_bits: u8,
        min_alarm_ticks: TimerTicks,
        crystal: CrystalDrift,
    ) -> Option<Self> {
        if prediv_bits > MAX_PREDIV_BITS {
            return None;
        }
        Some(Self {
            prediv_bits,
            min_alarm_ticks,
            crystal,
        })
    }

    /// Synchronous prescaler width
    pub fn prediv_bits(&self) -> u8 {
        self.prediv_bits
    }

    /// Tick frequency in Hz
    pub fn ticks_per_second(&self) -> u32 {
        1 << self.prediv_bits
    }

    /// Convert milliseconds to ticks, rounding down
    ///
    /// Results past `u32::MAX` ticks are truncated to the low 32 bits, like
    /// the tick counter itself wraps.
    pub fn ms_to_tick(&self, ms: TimerTime) -> TimerTicks {
        (((ms as u64) << self.prediv_bits) / 1_000) as TimerTicks
    }

    /// Convert ticks to milliseconds, rounding down
    ///
    /// Results past `u32::MAX` milliseconds wrap.
    pub fn tick_to_ms(&self, ticks: TimerTicks) -> TimerTime {
        let seconds = ticks >> self.prediv_bits;
        let sub_second = (ticks & (self.ticks_per_second() - 1)) as u64;
        seconds
            .wrapping_mul(1_000)
            .wrapping_add(((sub_second * 1_000) >> self.prediv_bits) as TimerTime)
    }

    /// Correct `period` for crystal drift at `temperature` (°C)
    ///
    /// The tolerances are applied in the pessimistic direction. A negative
    /// result falls back to the uncompensated period.
    pub fn temp_compensation(&self, period: TimerTime, temperature: f32) -> TimerTime {
        let drift = &self.crystal;
        let mut ppm = if drift.coefficient < 0.0 {
            drift.coefficient - drift.coefficient_dev
        } else {
            drift.coefficient + drift.coefficient_dev
        };
        let offset = temperature - (drift.turnover - drift.turnover_dev);
        ppm *= offset * offset;

        let compensated = period as f32 + (period as f32 * ppm) / 1_000_000.0;
        if compensated < 0.0 {
            return period;
        }
        compensated as TimerTime
    }
}
