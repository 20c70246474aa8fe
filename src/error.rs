/// Failures of a single exchange on the AT socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The socket accepted fewer bytes than the command holds.
    SendIncomplete { sent: usize, expected: usize },
    /// The socket could not be opened, or failed a read/write.
    ChannelUnavailable,
    /// The rendered command does not fit in a [`CommandBuf`].
    ///
    /// [`CommandBuf`]: crate::command::CommandBuf
    CommandOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    // AT socket errors
    Transport(TransportError),
    /// The modem answered `ERROR` or `+CME ERROR`
    AtError,

    // Network errors
    RegistrationDenied,
    StateTimeout,

    // Board errors
    IoPin,
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}
