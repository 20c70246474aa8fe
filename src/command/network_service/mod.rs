//! ### Network service commands
//!

pub mod responses;

use core::fmt::Write as _;

use super::{AtCmd, CommandBuf};

/// Extended signal quality +CESQ
///
/// Returns the received signal quality parameters. On LTE only the RSRQ and
/// RSRP fields carry information; the GSM/UMTS fields read 99 or 255.
#[derive(Debug, Clone, Copy)]
pub struct GetExtendedSignalQuality;

impl AtCmd for GetExtendedSignalQuality {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        buf.write_str("AT+CESQ")
    }
}
