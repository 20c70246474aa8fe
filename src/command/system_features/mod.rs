//! ### nRF91 proprietary system commands
//!

pub mod types;

use core::fmt::Write as _;

use types::*;

use super::{AtCmd, CommandBuf};

/// Read system mode %XSYSTEMMODE
#[derive(Debug, Clone, Copy)]
pub struct GetSystemMode;

impl AtCmd for GetSystemMode {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        buf.write_str("AT%XSYSTEMMODE?")
    }
}

/// Set system mode %XSYSTEMMODE
///
/// Only accepted while the modem is in offline mode (`+CFUN=4`).
#[derive(Debug, Clone, Copy)]
pub struct SetSystemMode {
    pub mode: SystemMode,
}

impl AtCmd for SetSystemMode {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(
            buf,
            "AT%XSYSTEMMODE={},{},{},{}",
            u8::from(self.mode.lte_m),
            u8::from(self.mode.nb_iot),
            u8::from(self.mode.gnss),
            self.mode.preference as u8
        )
    }
}

/// Band lock %XBANDLOCK
///
/// The band mask is a bit string with band 1 as the rightmost digit, as wide
/// as the highest locked band.
#[derive(Debug, Clone, Copy)]
pub struct SetBandLock<'a> {
    pub operation: BandLockOperation,
    pub bands: &'a [u8],
}

impl AtCmd for SetBandLock<'_> {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        write!(buf, "AT%XBANDLOCK={}", self.operation as u8)?;

        let highest = self
            .bands
            .iter()
            .copied()
            .filter(|band| (1..=MAX_BAND).contains(band))
            .max();
        let Some(highest) = highest else {
            return Ok(());
        };

        buf.write_str(",\"")?;
        for band in (1..=highest).rev() {
            let bit = if self.bands.contains(&band) { '1' } else { '0' };
            buf.write_char(bit)?;
        }
        buf.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::render;

    #[test]
    fn system_mode() {
        assert_eq!(render(&GetSystemMode).unwrap().as_str(), "AT%XSYSTEMMODE?");
        let set = SetSystemMode {
            mode: SystemMode::LTE_M_GNSS,
        };
        assert_eq!(render(&set).unwrap().as_str(), "AT%XSYSTEMMODE=1,0,1,0");
        let set = SetSystemMode {
            mode: SystemMode::NB_IOT_GNSS,
        };
        assert_eq!(render(&set).unwrap().as_str(), "AT%XSYSTEMMODE=0,1,1,0");
    }

    #[test]
    fn band_mask() {
        let cmd = SetBandLock {
            operation: BandLockOperation::Volatile,
            bands: &[3, 4, 13, 20],
        };
        assert_eq!(
            render(&cmd).unwrap().as_str(),
            "AT%XBANDLOCK=2,\"10000001000000001100\""
        );
    }

    #[test]
    fn band_order_and_duplicates_do_not_matter() {
        let cmd = SetBandLock {
            operation: BandLockOperation::Volatile,
            bands: &[20, 3, 13, 4, 3],
        };
        assert_eq!(
            render(&cmd).unwrap().as_str(),
            "AT%XBANDLOCK=2,\"10000001000000001100\""
        );
    }

    #[test]
    fn remove_lock_has_no_mask() {
        let cmd = SetBandLock {
            operation: BandLockOperation::Remove,
            bands: &[],
        };
        assert_eq!(render(&cmd).unwrap().as_str(), "AT%XBANDLOCK=0");
    }

    #[test]
    fn highest_band_fits() {
        let cmd = SetBandLock {
            operation: BandLockOperation::Permanent,
            bands: &[MAX_BAND, 0, 200],
        };
        let text = render(&cmd).unwrap();
        assert_eq!(text.len(), "AT%XBANDLOCK=1,\"\"".len() + MAX_BAND as usize);
        assert!(text.as_str().starts_with("AT%XBANDLOCK=1,\"1"));
    }
}
