//! AT Commands for the nRF91 modem family\
//! Following the nRF91 AT commands reference and 3GPP TS 27.007
//!
//! Commands are sent over the modem's AT socket as bare text: no `\r\n`
//! termination is appended.

pub mod fields;
pub mod mobile_control;
pub mod network_service;
pub mod power_saving;
pub mod psn;
pub mod system_features;

use core::fmt::Write as _;

use heapless::String;

use crate::error::TransportError;

/// Capacity of a rendered command, in bytes.
pub const COMMAND_LEN: usize = 128;

pub type CommandBuf = String<COMMAND_LEN>;

/// A command that can be rendered to its AT text form.
pub trait AtCmd {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result;

    /// Whether the modem is expected to answer this command on the socket.
    ///
    /// Commands returning `false` are sent without draining a response.
    fn expects_response(&self) -> bool {
        true
    }
}

/// Command text sent verbatim, e.g. a line typed on the console.
#[derive(Debug, Clone, Copy)]
pub struct Raw<'a>(pub &'a str);

impl AtCmd for Raw<'_> {
    fn write(&self, buf: &mut CommandBuf) -> core::fmt::Result {
        buf.write_str(self.0)
    }
}

/// Render `cmd` into a fresh [`CommandBuf`].
pub fn render(cmd: &dyn AtCmd) -> Result<CommandBuf, TransportError> {
    let mut buf = CommandBuf::new();
    cmd.write(&mut buf)
        .map_err(|_| TransportError::CommandOverflow)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_verbatim() {
        let buf = render(&Raw("AT+CGSN=1")).unwrap();
        assert_eq!(buf.as_str(), "AT+CGSN=1");
    }

    #[test]
    fn overflow_is_reported() {
        let long = [b'A'; COMMAND_LEN + 1];
        let text = core::str::from_utf8(&long).unwrap();
        assert_eq!(
            render(&Raw(text)).unwrap_err(),
            TransportError::CommandOverflow
        );
    }
}
