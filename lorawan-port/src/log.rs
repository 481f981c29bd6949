#![allow(unused_macros)]
#![allow(unused_imports)]

#[cfg(feature = "defmt")]
macro_rules! llog {
    (trace, $($arg:expr),*) => { defmt::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { defmt::debug!($($arg),*) };
    (info,  $($arg:expr),*) => { defmt::info!($($arg),*) };
    (error, $($arg:expr),*) => { defmt::error!($($arg),*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! llog {
    ($level:ident, $($arg:expr),*) => {{ $( let _ = $arg; )* }};
}
pub(crate) use llog;

macro_rules! trace {
    ($($arg:expr),*) => ($crate::log::llog!(trace, $($arg),*));
}
pub(crate) use trace;

macro_rules! debug {
    ($($arg:expr),*) => ($crate::log::llog!(debug, $($arg),*));
}
pub(crate) use debug;

macro_rules! info {
    ($($arg:expr),*) => ($crate::log::llog!(info, $($arg),*));
}
pub(crate) use info;

macro_rules! error {
    ($($arg:expr),*) => ($crate::log::llog!(error, $($arg),*));
}
pub(crate) use error;
