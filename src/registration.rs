use crate::command::{fields, network_service::responses::SignalQuality};

const CEREG: &str = "+CEREG: ";

/// EPS registration status, as reported in `+CEREG` notifications.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Not a registration notification, or an unknown status code
    #[default]
    None,
    NotRegistering,
    Home,
    Searching,
    Denied,
    /// Status unknown, e.g. out of E-UTRAN coverage
    OutOfCoverage,
    Roaming,
    /// Attached for emergency bearer services only
    EmergencyOnly,
    /// SIM card failure
    UiccFailure,
}

impl From<u8> for Status {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::NotRegistering,
            1 => Self::Home,
            2 => Self::Searching,
            3 => Self::Denied,
            4 => Self::OutOfCoverage,
            5 => Self::Roaming,
            8 => Self::EmergencyOnly,
            90 => Self::UiccFailure,
            _ => Self::None,
        }
    }
}

impl Status {
    /// Classify a line read from the AT socket.
    ///
    /// Only the first comma separated field is inspected, so
    /// `+CEREG: 5,"0A0B","01020304",7` reads as [`Status::Roaming`]. Anything
    /// that is not exactly `+CEREG: <stat>`, with a single space and `<stat>`
    /// in plain decimal without sign or leading zeros, yields [`Status::None`].
    pub fn parse(text: &str) -> Self {
        fields::field(fields::first_line(text), 0)
            .and_then(|f| f.strip_prefix(CEREG))
            .filter(|stat| is_plain_decimal(stat))
            .and_then(|stat| stat.parse::<u8>().ok())
            .map(Self::from)
            .unwrap_or_default()
    }

    pub fn registered(&self) -> bool {
        matches!(self, Self::Home | Self::Roaming)
    }

    pub fn denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Whether a registration wait ends on this status.
    pub fn is_terminal(&self) -> bool {
        self.registered() || self.denied()
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let b = s.as_bytes();
    !b.is_empty() && b.iter().all(u8::is_ascii_digit) && (b.len() == 1 || b[0] != b'0')
}

/// Outcome of a successful network connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registration {
    /// Either [`Status::Home`] or [`Status::Roaming`]
    pub status: Status,
    /// Signal quality read right after registering, if the modem answered
    pub signal_quality: Option<SignalQuality>,
}
