//! Responses for Packet switched data services Commands
use heapless::String;

use crate::command::fields;

/// Maximum APN length, 3GPP TS 23.003
pub const APN_LEN: usize = 100;
/// Long enough for a textual IPv4v6 address pair
pub const ADDR_LEN: usize = 64;

const DEFAULT_CONTEXT: &str = "+CGDCONT: 0";
const IP_BEARER: &str = "\"IP\"";
const EMPTY: &str = "\"\"";

/// APN and address of the default IP bearer, from a +CGDCONT read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpContext {
    pub apn: String<APN_LEN>,
    pub address: String<ADDR_LEN>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for IpContext {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "IpContext {{ apn: {=str}, address: {=str} }}", self.apn.as_str(), self.address.as_str())
    }
}

impl IpContext {
    /// Parse `+CGDCONT: 0,"IP","<apn>","<addr>",...`.
    ///
    /// Returns `None` ("not established") for any other context or bearer
    /// type, or when the APN or address is still the empty `""` placeholder.
    pub fn parse(text: &str) -> Option<Self> {
        let line = fields::first_line(text);

        if fields::field(line, 0)? != DEFAULT_CONTEXT {
            return None;
        }
        if fields::field(line, 1)? != IP_BEARER {
            return None;
        }

        let apn = fields::field(line, 2).filter(|f| *f != EMPTY)?;
        let address = fields::field(line, 3).filter(|f| *f != EMPTY)?;

        Some(Self {
            apn: String::try_from(fields::unquote(apn)).ok()?,
            address: String::try_from(fields::unquote(address)).ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn established_context() {
        let ctx = IpContext::parse("+CGDCONT: 0,\"IP\",\"ibasis.iot\",\"10.0.0.5\"").unwrap();
        assert_eq!(ctx.apn.as_str(), "ibasis.iot");
        assert_eq!(ctx.address.as_str(), "10.0.0.5");
    }

    #[test]
    fn trailing_fields_and_result_code() {
        let ctx =
            IpContext::parse("+CGDCONT: 0,\"IP\",\"ibasis.iot\",\"10.160.42.7\",0,0\r\nOK\r\n")
                .unwrap();
        assert_eq!(ctx.address.as_str(), "10.160.42.7");
    }

    #[test]
    fn placeholder_address_is_not_established() {
        assert_eq!(IpContext::parse("+CGDCONT: 0,\"IP\",\"ibasis.iot\",\"\""), None);
    }

    #[test]
    fn placeholder_apn_is_not_established() {
        assert_eq!(IpContext::parse("+CGDCONT: 0,\"IP\",\"\",\"10.0.0.5\""), None);
    }

    #[test]
    fn other_context_or_bearer() {
        assert_eq!(IpContext::parse("+CGDCONT: 1,\"IP\",\"a\",\"10.0.0.5\""), None);
        assert_eq!(IpContext::parse("+CGDCONT: 0,\"IPV6\",\"a\",\"::1\""), None);
    }

    #[test]
    fn short_line() {
        assert_eq!(IpContext::parse("+CGDCONT: 0,\"IP\",\"ibasis.iot\""), None);
        assert_eq!(IpContext::parse("OK"), None);
        assert_eq!(IpContext::parse(""), None);
    }
}
