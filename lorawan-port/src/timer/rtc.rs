use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use super::{TimerEvent, TimerTicks, TimerTime};
use crate::hw::RtcDriver;
use crate::log::{debug, trace};
use crate::timer::Timer;

/// [`Timer`] implementation on top of a board RTC driver
pub struct RtcTimer<D: RtcDriver> {
    rtc: D,
}

impl<D: RtcDriver> RtcTimer<D> {
    /// Wrap an RTC driver
    pub fn new(rtc: D) -> Self {
        Self { rtc }
    }

    /// Borrow the underlying driver
    pub fn driver(&self) -> &D {
        &self.rtc
    }

    /// Release the underlying driver
    pub fn free(self) -> D {
        self.rtc
    }
}

impl<D: RtcDriver> Timer for RtcTimer<D> {
    fn delay_ms(&mut self, delay: TimerTime) {
        self.rtc.delay_ms(delay);
    }

    fn set_timer_context(&mut self) -> TimerTicks {
        self.rtc.set_timer_context()
    }

    fn get_timer_context(&self) -> TimerTicks {
        self.rtc.get_timer_context()
    }

    fn get_timer_elapsed_time(&self) -> TimerTicks {
        self.rtc.get_timer_elapsed_time()
    }

    fn stop_alarm(&mut self) {
        self.rtc.stop_alarm();
    }

    fn set_alarm(&mut self, timeout: TimerTicks) {
        trace!("alarm armed at {} ticks", timeout);
        self.rtc.set_alarm(timeout);
    }

    fn set_mcu_wake_up_time(&mut self) {
        self.rtc.set_mcu_wake_up_time();
    }

    fn set_timeout(&mut self, event: &mut TimerEvent) {
        let min_ticks = self.rtc.get_minimum_timeout();
        event.is_running = true;

        let earliest = self.get_timer_elapsed_time().wrapping_add(min_ticks);
        if event.timestamp < earliest {
            debug!(
                "deadline {} too close, moved to {} ticks",
                event.timestamp,
                earliest
            );
            event.timestamp = earliest;
        }
        self.set_alarm(event.timestamp);
    }

    fn compute_elapsed_time(&self, time: TimerTime) -> TimerTime {
        let now = self.rtc.get_timer_value();
        let past = self.rtc.ms_to_tick(time);
        // Wraps on purpose; exact only while a tick is shorter than 1 ms.
        self.rtc.tick_to_ms(now.wrapping_sub(past))
    }

    fn get_current_time(&self) -> TimerTime {
        self.rtc.tick_to_ms(self.rtc.get_timer_value())
    }

    fn set_timer_val(&self, event: &mut TimerEvent, value: TimerTime) {
        let ticks = self.rtc.ms_to_tick(value).max(self.rtc.get_minimum_timeout());
        event.timestamp = ticks;
        event.reload_value = ticks;
    }

    fn get_temp_compensation(&self, period: TimerTime, temperature: f32) -> TimerTime {
        self.rtc.temp_compensation(period, temperature)
    }
}

impl<D: RtcDriver> DelayMs<u32> for RtcTimer<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.rtc.delay_ms(ms);
    }
}

impl<D: RtcDriver> DelayMs<u16> for RtcTimer<D> {
    fn delay_ms(&mut self, ms: u16) {
        self.rtc.delay_ms(ms.into());
    }
}

impl<D: RtcDriver> DelayUs<u32> for RtcTimer<D> {
    // The RTC only has millisecond resolution, round up.
    fn delay_us(&mut self, us: u32) {
        self.rtc.delay_ms(us.div_ceil(1_000));
    }
}
