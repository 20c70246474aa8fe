//! ### Mobile termination control and status commands
//!

pub mod types;

use core::fmt::Write as _;

use types::*;

use super::{AtCmd, CommandBuf};

/// Set functional mode +CFUN
///
/// Selects the level of functionality in the modem. Besides the 3GPP modes
/// the nRF91 can switch the LTE and GNSS radio paths independently.
#[derive(Debug, Clone, Copy)]
pub struct SetModuleFunctionality {
    pub fun: Functionality,
}

impl AtCmd for SetModuleFunctionality {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT+CFUN={}", self.fun as u8)
    }
}

/// Indicator control +CIND
///
/// Reads the state of the indicators reported by the modem, e.g. service
/// availability and roaming.
#[derive(Debug, Clone, Copy)]
pub struct GetIndicatorControl;

impl AtCmd for GetIndicatorControl {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        buf.write_str("AT+CIND?")
    }
}
