//! Responses for Network service Commands
use crate::command::fields;

/// Decoded +CESQ response
///
/// `rsrq` and `rsrp` are the magnitudes of the (negative) dB and dBm values,
/// computed with the fixed transforms `20 - rsrq_code / 2` and
/// `140 - rsrp_code + 1`. Codes of 255 ("not known") are not filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalQuality {
    pub rsrq: i32,
    pub rsrp: i32,
}

impl SignalQuality {
    /// `None` when a code is so far out of range that the transform
    /// overflows.
    pub fn from_codes(rsrq_code: i32, rsrp_code: i32) -> Option<Self> {
        Some(Self {
            rsrq: 20i32.checked_sub(rsrq_code / 2)?,
            rsrp: 140i32.checked_sub(rsrp_code)?.checked_add(1)?,
        })
    }

    /// Parse a `+CESQ: <rxlev>,<ber>,<rscp>,<ecno>,<rsrq>,<rsrp>` response.
    pub fn parse(text: &str) -> Option<Self> {
        let line = fields::first_line(text);
        let rsrq_code = fields::field(line, 4).and_then(fields::leading_int)?;
        let rsrp_code = fields::field(line, 5).and_then(fields::leading_int)?;
        Self::from_codes(rsrq_code, rsrp_code)
    }
}
