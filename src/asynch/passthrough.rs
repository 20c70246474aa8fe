use embedded_io_async::{Read, Write};

use crate::{
    error::Error,
    line_buffer::{LineBuffer, LINE_LEN},
    traits::Modem,
};

use super::at::{AtTransport, ResponseLine};

/// Forwards lines typed on a console to the modem and logs its replies.
///
/// You must call `.run()` in a background task, while an interrupt handler
/// feeds received bytes to the [`LineBuffer`].
pub struct Passthrough<'d, S, const N: usize = LINE_LEN> {
    lines: &'d LineBuffer<N>,
    at: AtTransport<S>,
}

impl<'d, S, const N: usize> Passthrough<'d, S, N>
where
    S: Read + Write,
{
    /// Open a dedicated AT socket for forwarded lines.
    pub fn new<M>(modem: &mut M, lines: &'d LineBuffer<N>) -> Result<Self, Error>
    where
        M: Modem<Socket = S>,
    {
        Ok(Self {
            lines,
            at: AtTransport::open(modem)?,
        })
    }

    /// Wait for one line, forward it and read the modem's reply.
    ///
    /// An empty line is consumed without being sent and yields `Ok(None)`.
    pub async fn forward_once(&mut self) -> Result<Option<ResponseLine>, Error> {
        let line = self.lines.wait_line().await;
        if line.is_empty() {
            return Ok(None);
        }

        self.at.send_bytes(&line).await?;

        let mut reply = ResponseLine::new();
        if self.at.receive(&mut reply).await? > 0 {
            info!("{}", reply.as_str());
        }
        Ok(Some(reply))
    }

    pub async fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.forward_once().await {
                warn!("Failed to forward line: {:?}", e);
            }
        }
    }
}
