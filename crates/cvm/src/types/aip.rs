use std::fmt;

use bytes::Bytes;
use derive_more::Display;

/// Byte-1 capability flags of the Application Interchange Profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AipFlag {
    /// Static data authentication supported
    #[display("SDA supported")]
    StaticDataAuth = 0x40,
    /// Dynamic data authentication supported
    #[display("DDA supported")]
    DynamicDataAuth = 0x20,
    /// Cardholder verification supported
    #[display("Cardholder verification supported")]
    CardholderVerification = 0x10,
    /// Terminal risk management is to be performed
    #[display("Terminal risk management")]
    TerminalRiskManagement = 0x08,
    /// Issuer authentication supported
    #[display("Issuer authentication supported")]
    IssuerAuthentication = 0x04,
    /// Combined DDA/application cryptogram generation supported
    #[display("CDA supported")]
    CombinedDataAuth = 0x01,
}

impl AipFlag {
    const ALL: [Self; 6] = [
        Self::StaticDataAuth,
        Self::DynamicDataAuth,
        Self::CardholderVerification,
        Self::TerminalRiskManagement,
        Self::IssuerAuthentication,
        Self::CombinedDataAuth,
    ];
}

/// Application Interchange Profile (tag `82`)
///
/// Only the first byte's flags are interpreted; the PIN policy consumes
/// just [`AipFlag::CardholderVerification`]. An empty profile reports no
/// capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aip(Bytes);

impl Aip {
    /// Wrap raw AIP bytes as returned by the card
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the profile carries no bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a byte-1 flag is set
    pub fn has_flag(&self, flag: AipFlag) -> bool {
        self.0.first().is_some_and(|byte| byte & flag as u8 != 0)
    }

    /// Whether the card supports cardholder verification
    pub fn supports_cardholder_verification(&self) -> bool {
        self.has_flag(AipFlag::CardholderVerification)
    }
}

impl fmt::Display for Aip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<String> = AipFlag::ALL
            .iter()
            .filter(|flag| self.has_flag(**flag))
            .map(ToString::to_string)
            .collect();
        write!(f, "{}", flags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_supported() {
        assert!(Aip::new(vec![0x38, 0x00]).supports_cardholder_verification());
    }

    #[test]
    fn test_verification_not_supported() {
        assert!(!Aip::new(vec![0x30, 0x00]).supports_cardholder_verification());
    }

    #[test]
    fn test_empty_profile() {
        let aip = Aip::new(Vec::new());
        assert!(aip.is_empty());
        assert!(!aip.supports_cardholder_verification());
    }

    #[test]
    fn test_single_byte_profile() {
        assert!(Aip::new(vec![0x10]).supports_cardholder_verification());
    }

    #[test]
    fn test_flags() {
        let aip = Aip::new(vec![0x38, 0x00]);
        assert!(aip.has_flag(AipFlag::DynamicDataAuth));
        assert!(aip.has_flag(AipFlag::TerminalRiskManagement));
        assert!(!aip.has_flag(AipFlag::StaticDataAuth));
        assert!(!aip.has_flag(AipFlag::CombinedDataAuth));
    }

    #[test]
    fn test_display_joins_set_flags() {
        let aip = Aip::new(vec![0x18]);
        assert_eq!(
            aip.to_string(),
            "Cardholder verification supported, Terminal risk management"
        );
    }
}
