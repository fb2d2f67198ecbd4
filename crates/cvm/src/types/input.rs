use bytes::Bytes;
use pinsight_tlv::{TlvMap, parse_hex};

use crate::error::Result;
use crate::tags;

/// A card tag value supplied either as a hex string or as raw bytes
///
/// Resolved into a canonical byte buffer once at the evaluation boundary;
/// no downstream code branches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// Hex rendering of the value; ASCII whitespace between pairs is
    /// ignored
    Hex(String),
    /// Raw value bytes
    Raw(Bytes),
}

impl TagValue {
    /// Resolve to raw bytes, decoding the hex variant
    pub fn resolve(&self) -> Result<Bytes> {
        match self {
            Self::Hex(input) => Ok(Bytes::from(parse_hex(input)?)),
            Self::Raw(bytes) => Ok(bytes.clone()),
        }
    }
}

impl From<&str> for TagValue {
    fn from(input: &str) -> Self {
        Self::Hex(input.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(input: String) -> Self {
        Self::Hex(input)
    }
}

impl From<Vec<u8>> for TagValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(Bytes::from(bytes))
    }
}

impl From<&[u8]> for TagValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Raw(Bytes::copy_from_slice(bytes))
    }
}

impl From<Bytes> for TagValue {
    fn from(bytes: Bytes) -> Self {
        Self::Raw(bytes)
    }
}

/// The two card data objects the PIN policy consumes
///
/// Values may be supplied directly, hex or raw, or pulled out of a decoded
/// [`TlvMap`]. A missing value is a normal input, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardTags {
    aip: Option<TagValue>,
    cvm_list: Option<TagValue>,
}

impl CardTags {
    /// Empty input: both tags missing
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the Application Interchange Profile (tag `82`) value
    pub fn with_aip(mut self, value: impl Into<TagValue>) -> Self {
        self.aip = Some(value.into());
        self
    }

    /// Supply the CVM List (tag `8E`) value
    pub fn with_cvm_list(mut self, value: impl Into<TagValue>) -> Self {
        self.cvm_list = Some(value.into());
        self
    }

    /// Pull tags `82` and `8E` out of a decoded stream
    pub fn from_tlv(map: &TlvMap) -> Self {
        Self {
            aip: map.get(tags::AIP).cloned().map(TagValue::Raw),
            cvm_list: map.get(tags::CVM_LIST).cloned().map(TagValue::Raw),
        }
    }

    /// The AIP value as supplied
    pub fn aip(&self) -> Option<&TagValue> {
        self.aip.as_ref()
    }

    /// The CVM List value as supplied
    pub fn cvm_list(&self) -> Option<&TagValue> {
        self.cvm_list.as_ref()
    }

    /// Resolve both values to raw bytes
    pub(crate) fn resolve(&self) -> Result<(Option<Bytes>, Option<Bytes>)> {
        let aip = self.aip.as_ref().map(TagValue::resolve).transpose()?;
        let cvm_list = self.cvm_list.as_ref().map(TagValue::resolve).transpose()?;
        Ok((aip, cvm_list))
    }
}

#[cfg(test)]
mod tests {
    use pinsight_tlv::{TlvError, decode_hex};

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_hex_value_resolves() {
        let value = TagValue::from("38 00");
        assert_eq!(value.resolve().unwrap().as_ref(), &[0x38, 0x00]);
    }

    #[test]
    fn test_raw_value_resolves() {
        let value = TagValue::from(vec![0x38, 0x00]);
        assert_eq!(value.resolve().unwrap().as_ref(), &[0x38, 0x00]);
    }

    #[test]
    fn test_malformed_hex_is_an_error() {
        let odd = TagValue::from("123");
        assert!(matches!(
            odd.resolve(),
            Err(Error::Tlv(TlvError::InvalidHex(hex::FromHexError::OddLength)))
        ));

        let bad_char = TagValue::from("12G");
        assert!(matches!(
            bad_char.resolve(),
            Err(Error::Tlv(TlvError::InvalidHex(_)))
        ));
    }

    #[test]
    fn test_from_tlv() {
        let map = decode_hex("820238008E0401000200").unwrap();
        let tags = CardTags::from_tlv(&map);
        assert_eq!(
            tags.aip().unwrap().resolve().unwrap().as_ref(),
            &[0x38, 0x00]
        );
        assert_eq!(
            tags.cvm_list().unwrap().resolve().unwrap().as_ref(),
            &[0x01, 0x00, 0x02, 0x00]
        );
    }

    #[test]
    fn test_from_tlv_missing_tags() {
        let map = decode_hex("5A080000000000000000").unwrap();
        let tags = CardTags::from_tlv(&map);
        assert!(tags.aip().is_none());
        assert!(tags.cvm_list().is_none());
    }
}
