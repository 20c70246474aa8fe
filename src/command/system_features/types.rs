//! Argument and parameter types used by nRF91 system Commands

/// Highest E-UTRA band number a band mask can hold
pub const MAX_BAND: u8 = 88;

/// Preferred LTE mode when both LTE-M and NB-IoT are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LtePreference {
    /// No preference, decided by the modem
    Auto = 0,
    LteM = 1,
    NbIot = 2,
    /// Network selection priority over LTE-M
    PlmnLteM = 3,
    /// Network selection priority over NB-IoT
    PlmnNbIot = 4,
}

/// Radio systems the modem is allowed to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemMode {
    pub lte_m: bool,
    pub nb_iot: bool,
    pub gnss: bool,
    pub preference: LtePreference,
}

impl SystemMode {
    pub const LTE_M_GNSS: Self = Self {
        lte_m: true,
        nb_iot: false,
        gnss: true,
        preference: LtePreference::Auto,
    };

    pub const NB_IOT_GNSS: Self = Self {
        lte_m: false,
        nb_iot: true,
        gnss: true,
        preference: LtePreference::Auto,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BandLockOperation {
    /// Remove all band locks
    Remove = 0,
    /// Lock bands, stored in NVM
    Permanent = 1,
    /// Lock bands until the next reboot
    Volatile = 2,
}
