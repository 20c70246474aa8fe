use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Read, Write};

use crate::{
    command::network_service::{responses::SignalQuality, GetExtendedSignalQuality},
    error::Error,
    module_timing,
    registration::Status,
};

use super::at::{AtTransport, ResponseLine};

/// Network operations on an open AT socket.
pub(crate) struct NetDevice<'b, S, D> {
    at: &'b mut AtTransport<S>,
    delay: &'b mut D,
}

impl<'b, S, D> NetDevice<'b, S, D>
where
    S: Read + Write,
    D: DelayNs,
{
    pub(crate) fn new(at: &'b mut AtTransport<S>, delay: &'b mut D) -> Self {
        Self { at, delay }
    }

    /// Read `+CEREG` notifications until the modem reports it is registered
    /// or that registration was denied.
    ///
    /// The socket is polled every `poll_interval`. With `attempts` set, the
    /// wait ends with [`Error::StateTimeout`] after that many polls without a
    /// terminal status. Read failures count as polls without data.
    pub(crate) async fn wait_for_registration(
        &mut self,
        poll_interval: Duration,
        attempts: Option<u32>,
    ) -> Result<Status, Error> {
        info!("Awaiting registration in the LTE network...");

        let mut line = ResponseLine::new();
        let mut polls: u32 = 0;

        loop {
            if attempts.is_some_and(|max| polls >= max) {
                warn!("No registration after {} polls", polls);
                return Err(Error::StateTimeout);
            }
            polls = polls.saturating_add(1);

            match self.at.receive(&mut line).await {
                Ok(0) => {}
                Ok(_) => match Status::parse(line.as_str()) {
                    Status::Denied => {
                        error!("Registration denied");
                        return Err(Error::RegistrationDenied);
                    }
                    Status::Home => {
                        info!("Registered, home network");
                        return Ok(Status::Home);
                    }
                    Status::Roaming => {
                        info!("Registered, roaming");
                        return Ok(Status::Roaming);
                    }
                    status => trace!("Registration status: {:?}", status),
                },
                Err(e) => warn!("Failed to read registration status: {:?}", e),
            }

            module_timing::wait(self.delay, poll_interval).await;
        }
    }

    /// Issue `AT+CESQ` and decode the reply.
    ///
    /// `Ok(None)` when the reply could not be decoded.
    pub(crate) async fn signal_quality(&mut self) -> Result<Option<SignalQuality>, Error> {
        let line = self.at.command(&GetExtendedSignalQuality).await?;

        let signal_quality = SignalQuality::parse(line.as_str());
        match signal_quality {
            Some(sq) => info!(
                "LTE signal quality: rsrq -{} dB rsrp -{} dBm",
                sq.rsrq, sq.rsrp
            ),
            None => warn!("Unexpected signal quality response"),
        }
        Ok(signal_quality)
    }
}
