//! ### Packet switched data services commands
//!
//! In LTE the PS data connections are EPS bearers; the default bearer set up
//! during attach is reported by the modem as PDP context 0.

pub mod responses;
pub mod types;

use core::fmt::Write as _;

use types::*;

use super::{AtCmd, CommandBuf};

/// EPS network registration status +CEREG
///
/// Configures the unsolicited `+CEREG` notifications. The modem's
/// acknowledgement is not drained: the registration wait that follows reads
/// the socket anyway.
#[derive(Debug, Clone, Copy)]
pub struct SetEPSNetworkRegistrationStatus {
    pub n: EPSNetworkRegistrationUrcConfig,
}

impl AtCmd for SetEPSNetworkRegistrationStatus {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT+CEREG={}", self.n as u8)
    }

    fn expects_response(&self) -> bool {
        false
    }
}

/// Define PDP context +CGDCONT
#[derive(Debug, Clone, Copy)]
pub struct SetPDPContextDefinition<'a> {
    pub cid: ContextId,
    pub pdp_type: PDPType,
    pub apn: &'a str,
}

impl AtCmd for SetPDPContextDefinition<'_> {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(
            buf,
            "AT+CGDCONT={},\"{}\",\"{}\"",
            self.cid.0,
            self.pdp_type.as_str(),
            self.apn
        )
    }
}

/// Read PDP context definitions +CGDCONT
#[derive(Debug, Clone, Copy)]
pub struct GetPDPContextDefinition;

impl AtCmd for GetPDPContextDefinition {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        buf.write_str("AT+CGDCONT?")
    }
}

/// PS attach or detach +CGATT
#[derive(Debug, Clone, Copy)]
pub struct SetGPRSAttached {
    pub state: GPRSAttachedState,
}

impl AtCmd for SetGPRSAttached {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT+CGATT={}", self.state as u8)
    }
}

/// PDP context activate or deactivate +CGACT
#[derive(Debug, Clone, Copy)]
pub struct SetPDPContextState {
    pub status: PDPContextStatus,
    pub cid: Option<ContextId>,
}

impl AtCmd for SetPDPContextState {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT+CGACT={}", self.status as u8)?;
        if let Some(cid) = self.cid {
            write!(buf, ",{}", cid.0)?;
        }
        Ok(())
    }
}
