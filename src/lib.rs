#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod antenna;
pub mod asynch;
pub mod command;
pub mod config;
pub mod error;
pub mod line_buffer;
mod module_timing;
pub mod registration;
pub mod traits;

#[cfg(test)]
mod test_helpers;

pub use antenna::{Antenna, AntennaRoute};
pub use config::CellularConfig;
pub use error::Error;
pub use line_buffer::LineBuffer;
pub use traits::Modem;
