//! RF frontend routing.
//!
//! The modem has a single RF port shared between LTE and GNSS. Three
//! switches and a GNSS amplifier select where it goes:
//!
//! - SW1 picks the GNSS antenna (high: onboard, low: u.FL)
//! - SW2 picks the LTE antenna (low: onboard, high: u.FL)
//! - SW3 picks the path (low: LTE, high: GNSS)
//! - the amplifier is only powered on the GNSS path
//!
//! Every route drives all four outputs, so the resulting levels depend on
//! the route alone and never on the previously applied one.

use embedded_hal::digital::{OutputPin, PinState};

use crate::{config::CellularConfig, error::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Antenna {
    Onboard,
    /// u.FL connector
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AntennaRoute {
    LteOnboard,
    LteExternal,
    Gps,
    GpsExternal,
}

impl AntennaRoute {
    pub const fn lte(antenna: Antenna) -> Self {
        match antenna {
            Antenna::Onboard => Self::LteOnboard,
            Antenna::External => Self::LteExternal,
        }
    }

    pub const fn gps(antenna: Antenna) -> Self {
        match antenna {
            Antenna::Onboard => Self::Gps,
            Antenna::External => Self::GpsExternal,
        }
    }

    pub const fn is_gps(&self) -> bool {
        matches!(self, Self::Gps | Self::GpsExternal)
    }

    pub const fn levels(&self) -> RouteLevels {
        use PinState::{High, Low};

        match self {
            Self::LteOnboard => RouteLevels::new(Low, Low, Low, Low),
            Self::LteExternal => RouteLevels::new(Low, High, Low, Low),
            Self::Gps => RouteLevels::new(High, Low, High, High),
            Self::GpsExternal => RouteLevels::new(Low, Low, High, High),
        }
    }
}

/// Output levels of the frontend for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLevels {
    pub gps_switch: PinState,
    pub lte_switch: PinState,
    pub path_switch: PinState,
    pub gps_amp: PinState,
}

impl RouteLevels {
    const fn new(
        gps_switch: PinState,
        lte_switch: PinState,
        path_switch: PinState,
        gps_amp: PinState,
    ) -> Self {
        Self {
            gps_switch,
            lte_switch,
            path_switch,
            gps_amp,
        }
    }
}

pub(crate) struct AntennaCtrl<'b, C> {
    config: &'b mut C,
}

impl<'b, C> AntennaCtrl<'b, C>
where
    C: CellularConfig,
{
    pub(crate) fn new(config: &'b mut C) -> Self {
        Self { config }
    }

    /// Drive the frontend to `route`.
    ///
    /// All four outputs are written even if one of them fails, the first
    /// failure is then reported as [`Error::IoPin`].
    pub(crate) fn apply(&mut self, route: AntennaRoute) -> Result<(), Error> {
        let levels = route.levels();
        debug!("Routing RF frontend to {:?}", route);

        // Path switch first
        let results = [
            set_level(self.config.path_switch_pin(), levels.path_switch),
            set_level(self.config.gps_amp_pin(), levels.gps_amp),
            set_level(self.config.lte_switch_pin(), levels.lte_switch),
            set_level(self.config.gps_switch_pin(), levels.gps_switch),
        ];

        results.into_iter().collect()
    }
}

fn set_level<P: OutputPin>(pin: Option<&mut P>, level: PinState) -> Result<(), Error> {
    match pin {
        Some(pin) => pin.set_state(level).map_err(|_| Error::IoPin),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{MockConfig, MockPin};

    fn levels_of(config: &MockConfig) -> [bool; 4] {
        [
            config.gps_switch.level(),
            config.lte_switch.level(),
            config.path_switch.level(),
            config.gps_amp.level(),
        ]
    }

    #[test]
    fn route_table() {
        let mut config = MockConfig::default();

        AntennaCtrl::new(&mut config).apply(AntennaRoute::LteOnboard).unwrap();
        assert_eq!(levels_of(&config), [false, false, false, false]);

        AntennaCtrl::new(&mut config).apply(AntennaRoute::LteExternal).unwrap();
        assert_eq!(levels_of(&config), [false, true, false, false]);

        AntennaCtrl::new(&mut config).apply(AntennaRoute::Gps).unwrap();
        assert_eq!(levels_of(&config), [true, false, true, true]);

        AntennaCtrl::new(&mut config).apply(AntennaRoute::GpsExternal).unwrap();
        assert_eq!(levels_of(&config), [false, false, true, true]);
    }

    #[test]
    fn applying_twice_is_same_as_once() {
        let routes = [
            AntennaRoute::LteOnboard,
            AntennaRoute::LteExternal,
            AntennaRoute::Gps,
            AntennaRoute::GpsExternal,
        ];

        for from in routes {
            for to in routes {
                let mut once = MockConfig::default();
                AntennaCtrl::new(&mut once).apply(from).unwrap();
                AntennaCtrl::new(&mut once).apply(to).unwrap();

                let mut twice = MockConfig::default();
                AntennaCtrl::new(&mut twice).apply(from).unwrap();
                AntennaCtrl::new(&mut twice).apply(to).unwrap();
                AntennaCtrl::new(&mut twice).apply(to).unwrap();

                assert_eq!(levels_of(&once), levels_of(&twice), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn failing_pin_still_writes_the_rest() {
        let mut config = MockConfig::default();
        config.gps_amp = MockPin::failing();

        assert_eq!(
            AntennaCtrl::new(&mut config).apply(AntennaRoute::Gps),
            Err(Error::IoPin)
        );
        assert!(config.gps_switch.level());
        assert!(config.path_switch.level());
    }

    #[test]
    fn constructors() {
        assert_eq!(AntennaRoute::lte(Antenna::External), AntennaRoute::LteExternal);
        assert_eq!(AntennaRoute::gps(Antenna::Onboard), AntennaRoute::Gps);
        assert!(AntennaRoute::GpsExternal.is_gps());
        assert!(!AntennaRoute::LteOnboard.is_gps());
    }
}
