//! LoRaWAN board port
//!
//! This crate binds a LoRaWAN protocol stack to the peripheral drivers of a
//! single board. The stack talks to five capability interfaces and never
//! touches the hardware directly:
//! - [`device::power::PowerMode`]: stop and sleep low-power modes
//! - [`timer::Timer`]: RTC alarm, timer context and ms/tick conversion
//! - [`radio::RadioControl`]: radio reset line, chip select and SPI word exchange
//! - [`device::SystemInfo`]: battery level, unique id and random seed
//! - [`device::mft::ManufacturingInfo`]: factory identity and console baud rate
//!
//! Each interface has one board implementation that forwards to a lower-level
//! driver (see [`hw`]) or to `embedded-hal` peripherals. A board is the
//! compile-time composition of those implementations, see [`board::Board`].
//!
//! # Example
//! ```no_run
//! use lorawan_port::{
//!     hw::RtcDriver,
//!     timer::{RtcTimer, Timer, TimerEvent},
//! };
//!
//! fn arm_rx_window<D: RtcDriver>(timer: &mut RtcTimer<D>) {
//!     let mut event = TimerEvent::new();
//!     timer.set_timer_val(&mut event, 1_000);
//!     timer.set_timeout(&mut event);
//! }
//! ```

#![warn(missing_docs)]
#![no_std]

pub(crate) mod log;

/// Board composition of all capability implementations
pub mod board;

/// Board configuration (RTC arithmetic, battery thresholds, console)
pub mod config;

/// Power, system information and manufacturing interfaces
pub mod device;

/// Lower-level driver interfaces the board implementations forward to
pub mod hw;

/// Radio control (reset line, chip select, SPI)
pub mod radio;

/// RTC time and timer interface
pub mod timer;

pub use board::{Board, LoRaWanPort};
