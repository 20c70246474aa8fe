//! Argument and parameter types used by Mobile termination control Commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Functionality {
    /// Power off, storing the network registration state to NVM
    PowerOff = 0,
    /// Normal mode, full functionality
    Normal = 1,
    /// Offline ("flight") mode: both LTE and GNSS RF circuits disabled
    Offline = 4,
    /// Deactivate LTE without shutting down GNSS services
    DeactivateLte = 20,
    /// Activate LTE without changing GNSS
    ActivateLte = 21,
    /// Deactivate GNSS without shutting down LTE services
    DeactivateGnss = 30,
    /// Activate GNSS without changing LTE
    ActivateGnss = 31,
}
