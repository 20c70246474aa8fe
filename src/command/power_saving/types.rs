//! Argument and parameter types used by Power saving Commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerSavingMode {
    Disabled = 0,
    Enabled = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EdrxMode {
    Disabled = 0,
    Enabled = 1,
    /// Enabled, with `+CEDRXP` notifications
    EnabledWithUrc = 2,
    /// Disable eDRX and discard all parameters
    DisableAndReset = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EdrxActType {
    LteM = 4,
    NbIot = 5,
}
