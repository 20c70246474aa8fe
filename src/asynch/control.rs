use embedded_hal_async::delay::DelayNs;

use crate::{
    antenna::{Antenna, AntennaCtrl, AntennaRoute},
    command::{
        mobile_control::{types::Functionality, GetIndicatorControl, SetModuleFunctionality},
        network_service::responses::SignalQuality,
        power_saving::{
            types::{EdrxActType, EdrxMode, PowerSavingMode},
            SetEdrx, SetPowerSavingMode,
        },
        psn::{
            responses::IpContext,
            types::{EPSNetworkRegistrationUrcConfig, GPRSAttachedState, PDPContextStatus, PDPType},
            GetPDPContextDefinition, SetEPSNetworkRegistrationStatus, SetGPRSAttached,
            SetPDPContextDefinition, SetPDPContextState,
        },
        system_features::{
            types::BandLockOperation, GetSystemMode, SetBandLock, SetSystemMode,
        },
        AtCmd,
    },
    config::CellularConfig,
    error::Error,
    module_timing,
    registration::Registration,
    traits::Modem,
};

use super::{
    at::{AtTransport, ResponseLine},
    network::NetDevice,
    state::{self, OperationState},
};

/// Modem and RF frontend control.
///
/// Every operation opens its own AT socket and closes it before returning.
pub struct Control<'a, M, C, D> {
    state_ch: state::Runner<'a>,
    modem: M,
    config: C,
    delay: D,
}

impl<'a, M, C, D> Control<'a, M, C, D>
where
    M: Modem,
    C: CellularConfig,
    D: DelayNs,
{
    pub fn new(state_ch: state::Runner<'a>, modem: M, config: C, delay: D) -> Self {
        Self {
            state_ch,
            modem,
            config,
            delay,
        }
    }

    pub fn operation_state(&self) -> OperationState {
        self.state_ch.operation_state(None)
    }

    pub fn route(&self) -> Option<AntennaRoute> {
        self.state_ch.route()
    }

    pub async fn wait_for_operation_state(&self, ps: OperationState) {
        self.state_ch.wait_for_operation_state(ps).await
    }

    fn open(&mut self) -> Result<AtTransport<M::Socket>, Error> {
        Ok(AtTransport::open(&mut self.modem)?)
    }

    fn apply_route(&mut self, route: AntennaRoute) -> Result<(), Error> {
        AntennaCtrl::new(&mut self.config).apply(route)?;
        self.state_ch.set_route(route);
        Ok(())
    }

    /// Route the RF frontend to the given LTE antenna.
    ///
    /// Only the switches change, the modem is left alone.
    pub fn enter_lte(&mut self, antenna: Antenna) -> Result<(), Error> {
        self.apply_route(AntennaRoute::lte(antenna))
    }

    /// Configure the modem for LTE-M with GNSS, bring the radio up and wait
    /// for network registration.
    ///
    /// On success the signal quality is read once and returned along with
    /// the registration status. The AT socket is closed on every outcome.
    pub async fn connect(&mut self) -> Result<Registration, Error> {
        info!("Connecting to LTE");
        if self.route().is_some_and(|r| r.is_gps()) {
            warn!("Connecting while the RF frontend is routed to GNSS");
        }

        let mut at = self.open()?;
        self.state_ch
            .set_operation_state(OperationState::ConnectingLte);

        let res = self.connect_with(&mut at).await;
        at.close();

        match res {
            Ok(registration) => {
                info!("LTE connected");
                self.state_ch
                    .set_signal_quality(registration.signal_quality);
                self.state_ch.set_operation_state(OperationState::Registered);
            }
            Err(e) => {
                error!("Failed to connect to LTE: {:?}", e);
                self.state_ch.set_operation_state(match e {
                    Error::RegistrationDenied => OperationState::Denied,
                    _ => OperationState::LteIdle,
                });
            }
        }
        res
    }

    async fn connect_with(
        &mut self,
        at: &mut AtTransport<M::Socket>,
    ) -> Result<Registration, Error> {
        let psm = SetPowerSavingMode {
            mode: PowerSavingMode::Enabled,
            periodic_tau: Some(C::PSM_PERIODIC_TAU),
            active_time: Some(C::PSM_ACTIVE_TIME),
        };
        let edrx = SetEdrx {
            mode: EdrxMode::Enabled,
            act_type: Some(EdrxActType::LteM),
            value: Some(C::EDRX_VALUE),
        };
        let band_lock = SetBandLock {
            operation: BandLockOperation::Volatile,
            bands: C::BANDS,
        };

        let steps: [&dyn AtCmd; 9] = [
            // Flight mode while reconfiguring
            &SetModuleFunctionality {
                fun: Functionality::Offline,
            },
            &GetSystemMode,
            &SetSystemMode {
                mode: C::SYSTEM_MODE,
            },
            // GNSS only runs while LTE sleeps in PSM
            &psm,
            &GetIndicatorControl,
            &edrx,
            &band_lock,
            &SetEPSNetworkRegistrationStatus {
                n: EPSNetworkRegistrationUrcConfig::UrcPsmWithCause,
            },
            &SetModuleFunctionality {
                fun: Functionality::Normal,
            },
        ];

        for cmd in steps {
            at.command(cmd).await?;
        }

        let mut net = NetDevice::new(at, &mut self.delay);
        let status = net
            .wait_for_registration(C::REGISTRATION_POLL_INTERVAL, C::REGISTRATION_ATTEMPTS)
            .await?;

        let signal_quality = match net.signal_quality().await {
            Ok(sq) => sq,
            Err(e) => {
                warn!("Failed to read signal quality: {:?}", e);
                None
            }
        };

        Ok(Registration {
            status,
            signal_quality,
        })
    }

    /// Hand the RF frontend to GNSS and switch the modem to GNSS only
    /// operation.
    ///
    /// Best effort: a command that fails is logged and the sequence goes on.
    /// Only failing to open the AT socket or to drive the switches aborts it.
    pub async fn enable_gps(&mut self) -> Result<(), Error> {
        info!("Enabling GPS");

        let mut at = self.open()?;
        self.state_ch.set_operation_state(OperationState::GpsEnabling);

        if let Err(e) = self.apply_route(AntennaRoute::gps(C::GPS_ANTENNA)) {
            self.state_ch.set_operation_state(OperationState::LteIdle);
            return Err(e);
        }
        module_timing::wait(&mut self.delay, C::SETTLE_TIME).await;

        let steps: [&dyn AtCmd; 3] = [
            &SetModuleFunctionality {
                fun: Functionality::DeactivateLte,
            },
            &SetEdrx::disable(),
            &SetModuleFunctionality {
                fun: Functionality::ActivateGnss,
            },
        ];

        for cmd in steps {
            if let Err(e) = at.command(cmd).await {
                warn!("GPS enable step failed: {:?}", e);
            }
            module_timing::wait(&mut self.delay, C::SETTLE_TIME).await;
        }

        at.close();
        self.state_ch.set_operation_state(OperationState::GpsIdle);
        Ok(())
    }

    /// LTE route, [`Control::connect`], then [`Control::enable_gps`] once
    /// registered.
    pub async fn bring_up(&mut self) -> Result<Registration, Error> {
        self.enter_lte(C::LTE_ANTENNA)?;
        let registration = self.connect().await?;
        self.enable_gps().await?;
        Ok(registration)
    }

    /// Read the current signal quality.
    pub async fn signal_quality(&mut self) -> Result<Option<SignalQuality>, Error> {
        let mut at = self.open()?;
        let res = NetDevice::new(&mut at, &mut self.delay)
            .signal_quality()
            .await;
        at.close();
        res
    }

    /// Read the default bearer's APN and address.
    ///
    /// `Ok(None)` while no IP context is established.
    pub async fn ip_context(&mut self) -> Result<Option<IpContext>, Error> {
        let line = self.send(&GetPDPContextDefinition).await?;

        let ctx = IpContext::parse(line.as_str());
        match &ctx {
            Some(ctx) => info!("APN: {} IP: {}", ctx.apn.as_str(), ctx.address.as_str()),
            None => debug!("IP context not established"),
        }
        Ok(ctx)
    }

    pub async fn define_pdp_context(&mut self, apn: &str) -> Result<(), Error> {
        self.checked(&SetPDPContextDefinition {
            cid: C::CONTEXT_ID,
            pdp_type: PDPType::Ip,
            apn,
        })
        .await
    }

    pub async fn attach(&mut self) -> Result<(), Error> {
        self.checked(&SetGPRSAttached {
            state: GPRSAttachedState::Attached,
        })
        .await
    }

    pub async fn activate_pdp_context(&mut self) -> Result<(), Error> {
        self.checked(&SetPDPContextState {
            status: PDPContextStatus::Activated,
            cid: Some(C::CONTEXT_ID),
        })
        .await
    }

    /// Bring LTE back up without touching GNSS.
    pub async fn enable_lte(&mut self) -> Result<(), Error> {
        self.checked(&SetModuleFunctionality {
            fun: Functionality::ActivateLte,
        })
        .await
    }

    /// Send an AT command to the modem and return its raw response. This is
    /// useful for special configuration, but might interfere with the
    /// sequences above if the settings conflict.
    pub async fn send(&mut self, cmd: &dyn AtCmd) -> Result<ResponseLine, Error> {
        let mut at = self.open()?;
        let res = at.command(cmd).await;
        at.close();
        Ok(res?)
    }

    async fn checked(&mut self, cmd: &dyn AtCmd) -> Result<(), Error> {
        let line = self.send(cmd).await?;
        if line.is_error() {
            warn!("Command rejected: {}", line.as_str());
            return Err(Error::AtError);
        }
        Ok(())
    }
}
