//! Argument and parameter types used by Packet switched data services Commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ContextId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EPSNetworkRegistrationUrcConfig {
    /// Network registration URCs disabled
    UrcDisabled = 0,
    /// Network registration URC `+CEREG: <stat>` enabled
    UrcEnabled = 1,
    /// Adds location information (`<tac>`, `<ci>`, `<AcT>`)
    UrcVerbose = 2,
    /// Adds location information and the reject cause
    UrcVerboseWithCause = 3,
    /// Adds location information and PSM timer values
    UrcPsm = 4,
    /// Adds location information, the reject cause and PSM timer values
    UrcPsmWithCause = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PDPType {
    Ip,
    Ipv6,
    Ipv4v6,
    NonIp,
}

impl PDPType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Ipv6 => "IPV6",
            Self::Ipv4v6 => "IPV4V6",
            Self::NonIp => "Non-IP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GPRSAttachedState {
    Detached = 0,
    Attached = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PDPContextStatus {
    Deactivated = 0,
    Activated = 1,
}
