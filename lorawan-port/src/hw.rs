//! Driver seams
//!
//! These traits describe the board support package underneath the port: the
//! RTC tick driver, the low-power mode driver, the system readouts and the
//! manufacturing console. The port never implements them itself; a board
//! crate provides them on top of its register-level drivers and the port
//! forwards to them.
//!
//! GPIO and SPI are not modelled here; the radio control uses the
//! `embedded-hal` traits directly.

use crate::timer::{TimerTicks, TimerTime};

/// Length of the hardware unique identifier in bytes
pub const UNIQUE_ID_LEN: usize = 8;

/// Real-time clock driver
pub trait RtcDriver {
    /// Block the caller for `delay` milliseconds
    fn delay_ms(&mut self, delay: TimerTime);

    /// Store the current tick counter as the timer reference and return it
    fn set_timer_context(&mut self) -> TimerTicks;

    /// Timer reference stored by the last `set_timer_context`
    fn get_timer_context(&self) -> TimerTicks;

    /// Ticks elapsed since the timer reference
    fn get_timer_elapsed_time(&self) -> TimerTicks;

    /// Current value of the free-running tick counter
    fn get_timer_value(&self) -> TimerTicks;

    /// Smallest alarm delay the RTC can honour, in ticks
    fn get_minimum_timeout(&self) -> TimerTicks;

    /// Arm the alarm `timeout` ticks after the timer reference
    fn set_alarm(&mut self, timeout: TimerTicks);

    /// Disarm the alarm
    fn stop_alarm(&mut self);

    /// Measure the MCU wake-up latency out of stop mode
    fn set_mcu_wake_up_time(&mut self);

    /// Convert milliseconds to ticks
    fn ms_to_tick(&self, ms: TimerTime) -> TimerTicks;

    /// Convert ticks to milliseconds
    fn tick_to_ms(&self, ticks: TimerTicks) -> TimerTime;

    /// Correct `period` for crystal drift at `temperature` (°C)
    fn temp_compensation(&self, period: TimerTime, temperature: f32) -> TimerTime;
}

/// MCU low-power mode driver
pub trait LowPowerDriver {
    /// Enter stop mode
    fn enter_stop_mode(&mut self);

    /// Restore clocks after waking from stop mode
    fn exit_stop_mode(&mut self);

    /// Enter sleep mode
    fn enter_sleep_mode(&mut self);
}

/// System readouts
pub trait SystemDriver {
    /// Battery level in the LoRaWAN DevStatus encoding
    fn battery_level(&mut self) -> u8;

    /// Write the factory unique id into `id`
    fn unique_id(&self, id: &mut [u8; UNIQUE_ID_LEN]);

    /// Seed for the stack's pseudo random generator
    fn random_seed(&mut self) -> u32;
}

/// Manufacturing data and console driver
pub trait MftDriver {
    /// Manufacturer id
    fn mft_id(&self) -> u32;

    /// Model number
    fn mft_model(&self) -> u32;

    /// Hardware revision
    fn mft_rev(&self) -> u32;

    /// Serial number
    fn mft_sn(&self) -> u32;

    /// Switch the console baud rate, `false` if the rate is not supported
    fn set_mft_baud(&mut self, baud: u32) -> bool;

    /// Current console baud rate
    fn mft_baud(&self) -> u32;
}
