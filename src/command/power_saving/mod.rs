//! ### Power saving commands
//!
//! PSM and eDRX settings requested from the network. GNSS on the nRF91
//! shares the RF front end with LTE, so it only gets air time while LTE
//! sleeps in one of these modes.

pub mod types;

use core::fmt::Write as _;

use types::*;

use super::{AtCmd, CommandBuf};

/// Power saving mode setting +CPSMS
///
/// Timers are the 3GPP TS 24.008 GPRS Timer 3 (periodic TAU) and GPRS Timer 2
/// (active time) bit strings, e.g. `"00000110"`. The legacy RAU and GPRS
/// READY timer fields are always left empty.
#[derive(Debug, Clone, Copy)]
pub struct SetPowerSavingMode<'a> {
    pub mode: PowerSavingMode,
    pub periodic_tau: Option<&'a str>,
    pub active_time: Option<&'a str>,
}

impl AtCmd for SetPowerSavingMode<'_> {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT+CPSMS={}", self.mode as u8)?;
        if self.periodic_tau.is_none() && self.active_time.is_none() {
            return Ok(());
        }

        buf.write_str(",,,")?;
        if let Some(tau) = self.periodic_tau {
            write!(buf, "\"{}\"", tau)?;
        }
        if let Some(active_time) = self.active_time {
            write!(buf, ",\"{}\"", active_time)?;
        }
        Ok(())
    }
}

/// eDRX setting +CEDRXS
#[derive(Debug, Clone, Copy)]
pub struct SetEdrx<'a> {
    pub mode: EdrxMode,
    pub act_type: Option<EdrxActType>,
    /// Requested eDRX value, 4 bit string, e.g. `"1000"`
    pub value: Option<&'a str>,
}

impl SetEdrx<'_> {
    /// Disable eDRX and reset all parameters to their factory defaults
    pub const fn disable() -> Self {
        Self {
            mode: EdrxMode::DisableAndReset,
            act_type: None,
            value: None,
        }
    }
}

impl AtCmd for SetEdrx<'_> {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT+CEDRXS={}", self.mode as u8)?;
        if let Some(act_type) = self.act_type {
            write!(buf, ",{}", act_type as u8)?;
            if let Some(value) = self.value {
                write!(buf, ",\"{}\"", value)?;
            }
        }
        Ok(())
    }
}
