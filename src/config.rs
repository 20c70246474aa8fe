use core::convert::Infallible;
use embassy_time::Duration;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use crate::{
    antenna::Antenna,
    command::{psn::types::ContextId, system_features::types::SystemMode},
    module_timing,
};

/// Placeholder for a switch the board does not have.
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Output pin wrapper for switches driven through an inverting stage.
pub struct ReverseOutputPin<P: OutputPin<Error = Infallible>>(pub P);

impl<P: OutputPin<Error = Infallible>> ErrorType for ReverseOutputPin<P> {
    type Error = Infallible;
}

impl<P: OutputPin<Error = Infallible>> OutputPin for ReverseOutputPin<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        match state {
            PinState::Low => self.0.set_state(PinState::High),
            PinState::High => self.0.set_state(PinState::Low),
        }
    }
}

/// Board and network configuration of a cellular device.
///
/// The four RF frontend pins are owned by the implementor and must already
/// be configured as outputs. A board without one of the switches returns
/// `None` from the matching accessor (or uses [`NoPin`]).
pub trait CellularConfig {
    /// SW1, selects the onboard (high) or u.FL (low) GNSS antenna
    type GpsSwitchPin: OutputPin;
    /// SW2, selects the onboard (low) or u.FL (high) LTE antenna
    type LteSwitchPin: OutputPin;
    /// SW3, connects the modem RF port to the LTE (low) or GNSS (high) path
    type PathSwitchPin: OutputPin;
    /// Enable of the GNSS low noise amplifier
    type GpsAmpPin: OutputPin;

    const SYSTEM_MODE: SystemMode = SystemMode::LTE_M_GNSS;

    /// Requested periodic TAU (T3412), as a GPRS timer 3 bit string
    const PSM_PERIODIC_TAU: &'static str = "00000110";
    /// Requested active time (T3324), as a GPRS timer 2 bit string
    const PSM_ACTIVE_TIME: &'static str = "00000000";
    /// Requested eDRX cycle for LTE-M
    const EDRX_VALUE: &'static str = "1000";

    /// LTE bands the modem is locked to while connecting
    const BANDS: &'static [u8] = &[3, 4, 13, 20];

    const LTE_ANTENNA: Antenna = Antenna::Onboard;
    const GPS_ANTENNA: Antenna = Antenna::Onboard;

    const SETTLE_TIME: Duration = module_timing::settle_time();
    const REGISTRATION_POLL_INTERVAL: Duration = module_timing::registration_poll_interval();
    /// Number of empty or non-terminal reads before giving up on
    /// registration. `None` waits indefinitely.
    const REGISTRATION_ATTEMPTS: Option<u32> = None;

    const CONTEXT_ID: ContextId = ContextId(1);

    fn gps_switch_pin(&mut self) -> Option<&mut Self::GpsSwitchPin>;
    fn lte_switch_pin(&mut self) -> Option<&mut Self::LteSwitchPin>;
    fn path_switch_pin(&mut self) -> Option<&mut Self::PathSwitchPin>;
    fn gps_amp_pin(&mut self) -> Option<&mut Self::GpsAmpPin>;
}
