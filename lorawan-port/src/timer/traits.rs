use super::{delta_context, TimerEvent, TimerTicks, TimerTime};

/// Time and timer interface used by the LoRaWAN stack
pub trait Timer {
    /// Block the caller for `delay` milliseconds
    fn delay_ms(&mut self, delay: TimerTime);

    /// Latch the tick counter as the new timer reference and return it
    fn set_timer_context(&mut self) -> TimerTicks;

    /// Timer reference in ticks
    fn get_timer_context(&self) -> TimerTicks;

    /// Ticks from `old` to `now`, tolerating one counter overflow
    fn get_delta_context(&self, now: TimerTicks, old: TimerTicks) -> TimerTicks {
        delta_context(now, old)
    }

    /// Ticks elapsed since the timer reference
    fn get_timer_elapsed_time(&self) -> TimerTicks;

    /// Disarm the hardware alarm
    fn stop_alarm(&mut self);

    /// Arm the hardware alarm `timeout` ticks after the timer reference
    fn set_alarm(&mut self, timeout: TimerTicks);

    /// Measure the wake-up latency between the alarm and MCU start
    fn set_mcu_wake_up_time(&mut self);

    /// Mark `event` running and arm the alarm at its deadline
    ///
    /// A deadline closer than the minimum timeout is moved out to
    /// `elapsed + minimum timeout` before arming.
    fn set_timeout(&mut self, event: &mut TimerEvent);

    /// Milliseconds elapsed since `time`
    fn compute_elapsed_time(&self, time: TimerTime) -> TimerTime;

    /// Current tick counter in milliseconds
    fn get_current_time(&self) -> TimerTime;

    /// Load `event` with a period of `value` milliseconds
    ///
    /// The period is never shorter than the minimum timeout.
    fn set_timer_val(&self, event: &mut TimerEvent, value: TimerTime);

    /// Correct `period` for RTC crystal drift at `temperature` (°C)
    fn get_temp_compensation(&self, period: TimerTime, temperature: f32) -> TimerTime;
}
