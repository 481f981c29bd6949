//! Time and timer interface
//!
//! Time is carried in two units: [`TimerTime`] in milliseconds, the unit the
//! LoRaWAN stack schedules in, and [`TimerTicks`] in RTC counter ticks, the
//! unit the alarm hardware is armed in. Conversion between them belongs to
//! the RTC driver.

mod rtc;
mod traits;

pub use rtc::RtcTimer;
pub use traits::Timer;

/// Time in milliseconds
pub type TimerTime = u32;
/// Time in RTC ticks
pub type TimerTicks = u32;

/// Timer event owned by the LoRaWAN stack
///
/// The port only touches the fields below, through
/// [`Timer::set_timer_val`] and [`Timer::set_timeout`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerEvent {
    /// Alarm deadline in ticks, relative to the timer context
    pub timestamp: TimerTicks,
    /// Period the event is reloaded with, in ticks
    pub reload_value: TimerTicks,
    /// Whether the alarm for this event is armed
    pub is_running: bool,
}

impl TimerEvent {
    /// Create a stopped event with a zero deadline
    pub const fn new() -> Self {
        Self {
            timestamp: 0,
            reload_value: 0,
            is_running: false,
        }
    }
}

/// Ticks between two readings of the 32-bit tick counter
///
/// When `now` is behind `old` the counter wrapped and the result is
/// `0xFFFF_FFFF - (old - now)`.
pub fn delta_context(now: TimerTicks, old: TimerTicks) -> TimerTicks {
    if now >= old {
        now - old
    } else {
        0xFFFF_FFFF - (old - now)
    }
}
