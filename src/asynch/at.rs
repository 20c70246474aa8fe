use embedded_io_async::{Read, Write};
use heapless::Vec;

use crate::{
    command::{fields, render, AtCmd},
    error::TransportError,
    traits::Modem,
};

/// Capacity of one response buffer read from the AT socket.
pub const RESPONSE_LEN: usize = 128;

/// One buffer read from the AT socket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseLine {
    buf: Vec<u8, RESPONSE_LEN>,
}

impl ResponseLine {
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Response text, up to the first byte that is not valid UTF-8.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.buf) {
            Ok(text) => text,
            Err(e) => core::str::from_utf8(&self.buf[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether the modem rejected the command.
    pub fn is_error(&self) -> bool {
        let line = fields::first_line(self.as_str());
        line == "ERROR" || line.starts_with("+CME ERROR") || line.starts_with("+CMS ERROR")
    }
}

/// Command and response exchange on an open AT socket.
///
/// Dropping the transport closes the socket.
pub struct AtTransport<S> {
    socket: S,
}

impl<S> AtTransport<S>
where
    S: Read + Write,
{
    pub fn new(socket: S) -> Self {
        Self { socket }
    }

    pub fn open<M>(modem: &mut M) -> Result<Self, TransportError>
    where
        M: Modem<Socket = S>,
    {
        match modem.open_at_socket() {
            Ok(socket) => {
                trace!("AT socket opened");
                Ok(Self::new(socket))
            }
            Err(_) => {
                error!("Failed to create AT socket");
                Err(TransportError::ChannelUnavailable)
            }
        }
    }

    /// Send `cmd` without waiting for a response.
    pub async fn send(&mut self, cmd: &dyn AtCmd) -> Result<(), TransportError> {
        let buf = render(cmd)?;
        debug!("send: {}", buf.as_str());
        self.send_bytes(buf.as_bytes()).await
    }

    /// Send `bytes` verbatim as one message.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let sent = self.socket.write(bytes).await.map_err(|_| {
            error!("send failed");
            TransportError::ChannelUnavailable
        })?;

        if sent != bytes.len() {
            error!("send failed: {} of {} bytes", sent, bytes.len());
            return Err(TransportError::SendIncomplete {
                sent,
                expected: bytes.len(),
            });
        }
        Ok(())
    }

    /// Read one response into `line`, replacing its contents.
    ///
    /// Returns the number of bytes read. Zero means nothing has arrived yet.
    pub async fn receive(&mut self, line: &mut ResponseLine) -> Result<usize, TransportError> {
        line.buf.clear();
        line.buf
            .resize_default(RESPONSE_LEN)
            .map_err(|_| TransportError::ChannelUnavailable)?;

        let res = self.socket.read(&mut line.buf).await;
        let len = match res {
            Ok(len) => len.min(RESPONSE_LEN),
            Err(_) => {
                line.buf.clear();
                return Err(TransportError::ChannelUnavailable);
            }
        };
        line.buf.truncate(len);

        if len > 0 {
            debug!("recv: {}", line.as_str());
        }
        Ok(len)
    }

    /// Send `cmd`, then read its response if it has one.
    pub async fn command(&mut self, cmd: &dyn AtCmd) -> Result<ResponseLine, TransportError> {
        self.send(cmd).await?;

        let mut line = ResponseLine::new();
        if cmd.expects_response() {
            self.receive(&mut line).await?;
        }
        Ok(line)
    }

    pub fn close(self) {
        trace!("AT socket closed");
    }
}
