use embedded_io_async::{Read, Write};

/// Access to the modem's AT command interface.
///
/// Each call to [`Modem::open_at_socket`] yields an independent, message
/// framed AT socket: one `write` carries one command, one `read` yields one
/// response buffer, and a `read` of zero bytes means nothing has arrived yet.
/// Dropping the socket closes it.
pub trait Modem {
    type Socket: Read + Write;
    type Error: core::fmt::Debug;

    fn open_at_socket(&mut self) -> Result<Self::Socket, Self::Error>;
}
