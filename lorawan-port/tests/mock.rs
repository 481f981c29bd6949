#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::v2::{InputPin, IoPin, OutputPin, PinState};
use embedded_hal::spi::FullDuplex;
use heapless::Vec;
use lorawan_port::config::{ConsoleConfig, RtcConfig};
use lorawan_port::hw::{LowPowerDriver, MftDriver, RtcDriver, SystemDriver, UNIQUE_ID_LEN};
use lorawan_port::timer::{TimerTicks, TimerTime};

/// Fake RTC with a manually advanced tick counter
pub struct FakeRtc {
    pub config: RtcConfig,
    pub now: TimerTicks,
    pub context: TimerTicks,
    pub alarm: Option<TimerTicks>,
    pub delays: Vec<TimerTime, 16>,
    pub wake_up_measured: bool,
}

impl FakeRtc {
    pub fn new() -> Self {
        Self {
            config: RtcConfig::default(),
            now: 0,
            context: 0,
            alarm: None,
            delays: Vec::new(),
            wake_up_measured: false,
        }
    }

    pub fn with_min_timeout(min_alarm_ticks: TimerTicks) -> Self {
        let mut rtc = Self::new();
        rtc.config.min_alarm_ticks = min_alarm_ticks;
        rtc
    }
}

impl RtcDriver for FakeRtc {
    fn delay_ms(&mut self, delay: TimerTime) {
        self.delays.push(delay).unwrap();
        self.now = self.now.wrapping_add(self.config.ms_to_tick(delay));
    }

    fn set_timer_context(&mut self) -> TimerTicks {
        self.context = self.now;
        self.context
    }

    fn get_timer_context(&self) -> TimerTicks {
        self.context
    }

    fn get_timer_elapsed_time(&self) -> TimerTicks {
        self.now.wrapping_sub(self.context)
    }

    fn get_timer_value(&self) -> TimerTicks {
        self.now
    }

    fn get_minimum_timeout(&self) -> TimerTicks {
        self.config.min_alarm_ticks
    }

    fn set_alarm(&mut self, timeout: TimerTicks) {
        self.alarm = Some(timeout);
    }

    fn stop_alarm(&mut self) {
        self.alarm = None;
    }

    fn set_mcu_wake_up_time(&mut self) {
        self.wake_up_measured = true;
    }

    fn ms_to_tick(&self, ms: TimerTime) -> TimerTicks {
        self.config.ms_to_tick(ms)
    }

    fn tick_to_ms(&self, ticks: TimerTicks) -> TimerTime {
        self.config.tick_to_ms(ticks)
    }

    fn temp_compensation(&self, period: TimerTime, temperature: f32) -> TimerTime {
        self.config.temp_compensation(period, temperature)
    }
}

/// Low-power driver call log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCall {
    EnterStop,
    ExitStop,
    EnterSleep,
}

/// Fake low-power driver recording every call
pub struct FakeLowPower {
    pub calls: Vec<PowerCall, 16>,
}

impl FakeLowPower {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

impl LowPowerDriver for FakeLowPower {
    fn enter_stop_mode(&mut self) {
        self.calls.push(PowerCall::EnterStop).unwrap();
    }

    fn exit_stop_mode(&mut self) {
        self.calls.push(PowerCall::ExitStop).unwrap();
    }

    fn enter_sleep_mode(&mut self) {
        self.calls.push(PowerCall::EnterSleep).unwrap();
    }
}

/// Fake system readouts
pub struct FakeSystem {
    pub battery: u8,
    pub id: [u8; UNIQUE_ID_LEN],
    pub seed: u32,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self {
            battery: 200,
            id: [0x00, 0x80, 0xE1, 0x15, 0x00, 0x0A, 0xB3, 0x21],
            seed: 0x1234_5678,
        }
    }
}

impl SystemDriver for FakeSystem {
    fn battery_level(&mut self) -> u8 {
        self.battery
    }

    fn unique_id(&self, id: &mut [u8; UNIQUE_ID_LEN]) {
        id.copy_from_slice(&self.id);
    }

    fn random_seed(&mut self) -> u32 {
        let seed = self.seed;
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seed
    }
}

/// Fake manufacturing console validating against a baud table
pub struct FakeMft {
    pub console: ConsoleConfig,
    pub baud: u32,
    pub set_attempts: usize,
}

impl FakeMft {
    pub fn new() -> Self {
        let console = ConsoleConfig::default();
        Self {
            baud: console.default_baud(),
            console,
            set_attempts: 0,
        }
    }
}

impl MftDriver for FakeMft {
    fn mft_id(&self) -> u32 {
        0x0000_0E31
    }

    fn mft_model(&self) -> u32 {
        3047
    }

    fn mft_rev(&self) -> u32 {
        2
    }

    fn mft_sn(&self) -> u32 {
        0x00C0_FFEE
    }

    fn set_mft_baud(&mut self, baud: u32) -> bool {
        self.set_attempts += 1;
        if !self.console.supports(baud) {
            return false;
        }
        self.baud = baud;
        true
    }

    fn mft_baud(&self) -> u32 {
        self.baud
    }
}

/// Electrical event on a mock pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Switched to output mode with the given level
    Output(bool),
    /// Switched to input mode
    Input,
    /// Output level changed (`true` = high)
    Driven(bool),
}

/// Shared record of what happened on a pin
#[derive(Clone, Default)]
pub struct LineLog(Rc<RefCell<Vec<LineEvent, 32>>>);

impl LineLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: LineEvent) {
        self.0.borrow_mut().push(event).unwrap();
    }

    pub fn events(&self) -> Vec<LineEvent, 32> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<LineEvent> {
        self.0.borrow().last().copied()
    }
}

#[derive(Debug)]
pub struct MockPinError;

/// Push-pull output pin
pub struct MockOutputPin {
    log: LineLog,
}

impl MockOutputPin {
    pub fn new(log: &LineLog) -> Self {
        Self {
            log: log.clone(),
        }
    }
}

impl OutputPin for MockOutputPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.record(LineEvent::Driven(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.record(LineEvent::Driven(true));
        Ok(())
    }
}

fn level(state: PinState) -> bool {
    matches!(state, PinState::High)
}

/// Reset pin in input mode
pub struct ResetInput {
    log: LineLog,
    fail: bool,
}

/// Reset pin in output mode
pub struct ResetOutput {
    log: LineLog,
    fail: bool,
}

impl ResetInput {
    pub fn new(log: &LineLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    /// A pin whose mode switches always fail
    pub fn broken(log: &LineLog) -> Self {
        Self {
            log: log.clone(),
            fail: true,
        }
    }
}

impl InputPin for ResetInput {
    type Error = MockPinError;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl OutputPin for ResetOutput {
    type Error = MockPinError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.record(LineEvent::Driven(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.record(LineEvent::Driven(true));
        Ok(())
    }
}

impl IoPin<ResetInput, ResetOutput> for ResetInput {
    type Error = MockPinError;

    fn into_input_pin(self) -> Result<ResetInput, Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.log.record(LineEvent::Input);
        Ok(self)
    }

    fn into_output_pin(self, state: PinState) -> Result<ResetOutput, Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.log.record(LineEvent::Output(level(state)));
        Ok(ResetOutput {
            log: self.log,
            fail: self.fail,
        })
    }
}

impl IoPin<ResetInput, ResetOutput> for ResetOutput {
    type Error = MockPinError;

    fn into_input_pin(self) -> Result<ResetInput, Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.log.record(LineEvent::Input);
        Ok(ResetInput {
            log: self.log,
            fail: self.fail,
        })
    }

    fn into_output_pin(self, state: PinState) -> Result<ResetOutput, Self::Error> {
        if self.fail {
            return Err(MockPinError);
        }
        self.log.record(LineEvent::Output(level(state)));
        Ok(self)
    }
}

#[derive(Debug)]
pub struct MockSpiError;

/// Duplex SPI answering every word with its bytes swapped
///
/// Each read reports `WouldBlock` once before the word is available.
pub struct MockSpi {
    pub sent: Rc<RefCell<Vec<u16, 32>>>,
    rx: Option<u16>,
    busy_polls: u8,
    fail: bool,
}

impl MockSpi {
    pub fn new() -> Self {
        Self {
            sent: Rc::new(RefCell::new(Vec::new())),
            rx: None,
            busy_polls: 0,
            fail: false,
        }
    }

    pub fn broken() -> Self {
        let mut spi = Self::new();
        spi.fail = true;
        spi
    }
}

impl FullDuplex<u16> for MockSpi {
    type Error = MockSpiError;

    fn read(&mut self) -> nb::Result<u16, Self::Error> {
        if self.busy_polls > 0 {
            self.busy_polls -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.rx.take().ok_or(nb::Error::Other(MockSpiError))
    }

    fn send(&mut self, word: u16) -> nb::Result<(), Self::Error> {
        if self.fail {
            return Err(nb::Error::Other(MockSpiError));
        }
        self.sent.borrow_mut().push(word).unwrap();
        self.rx = Some(word.swap_bytes());
        self.busy_polls = 1;
        Ok(())
    }
}
