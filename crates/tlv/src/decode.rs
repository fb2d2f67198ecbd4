//! Flat BER-TLV stream decoding

use std::collections::HashMap;

use bytes::Bytes;
use tracing::trace;

use crate::error::{Result, TlvError};
use crate::hexstr::parse_hex;
use crate::tag::Tag;

/// Widest long-form length accepted, in bytes
///
/// Keeps the length accumulator within 32 bits; real EMV values never need
/// more than two.
const MAX_LENGTH_WIDTH: usize = 4;

/// Tag/value mapping produced by one [`decode`] call
///
/// Keys are unique: when the same tag occurs more than once in the input
/// stream, the later occurrence overwrites the earlier one. Downstream
/// consumers rely on this last-write-wins reading, so it is part of the
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlvMap {
    fields: HashMap<Tag, Bytes>,
}

impl TlvMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the raw value bytes for a tag
    pub fn get(&self, tag: Tag) -> Option<&Bytes> {
        self.fields.get(&tag)
    }

    /// Whether a tag is present
    pub fn contains(&self, tag: Tag) -> bool {
        self.fields.contains_key(&tag)
    }

    /// Insert a value, returning the entry it overwrote, if any
    pub fn insert(&mut self, tag: Tag, value: impl Into<Bytes>) -> Option<Bytes> {
        self.fields.insert(tag, value.into())
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &Bytes)> {
        self.fields.iter().map(|(tag, value)| (*tag, value))
    }
}

/// Decode a flat BER-TLV byte stream into a [`TlvMap`]
///
/// Single pass over the input: one-byte tag (or two-byte when the leading
/// byte's low 5 bits are all set), short- or long-form length, then the
/// value, copied out of the input. Constructed tags are not descended into.
/// An empty input yields an empty map.
///
/// Fails without returning a partial map when a tag, length, or value would
/// run past the end of the input, or when a long-form length is wider than
/// 4 bytes.
pub fn decode(data: &[u8]) -> Result<TlvMap> {
    let mut fields = TlvMap::new();
    let mut cursor = 0usize;

    while cursor < data.len() {
        let first = data[cursor];
        cursor += 1;

        let tag = if Tag::first_byte_is_extended(first) {
            let next = *data
                .get(cursor)
                .ok_or(TlvError::TruncatedTag { offset: cursor })?;
            cursor += 1;
            Tag::from_first_and_next(first, next)
        } else {
            Tag::from(first)
        };

        let length_byte = *data
            .get(cursor)
            .ok_or(TlvError::TruncatedLength { offset: cursor })?;
        cursor += 1;

        let length = if length_byte & 0x80 != 0 {
            let width = (length_byte & 0x7F) as usize;
            if width > MAX_LENGTH_WIDTH {
                return Err(TlvError::LengthOverflow {
                    offset: cursor - 1,
                    width,
                });
            }
            let length_bytes = data
                .get(cursor..cursor + width)
                .ok_or(TlvError::TruncatedLength { offset: cursor })?;
            cursor += width;
            length_bytes
                .iter()
                .fold(0usize, |acc, byte| (acc << 8) | usize::from(*byte))
        } else {
            usize::from(length_byte)
        };

        let end = cursor
            .checked_add(length)
            .filter(|end| *end <= data.len())
            .ok_or(TlvError::TruncatedValue {
                offset: cursor,
                declared: length,
                available: data.len() - cursor,
            })?;

        trace!(%tag, length, offset = cursor, "decoded field");
        fields.insert(tag, Bytes::copy_from_slice(&data[cursor..end]));
        cursor = end;
    }

    Ok(fields)
}

/// Decode a hex-encoded TLV stream
///
/// ASCII whitespace between hex pairs is ignored; see [`parse_hex`].
pub fn decode_hex(input: &str) -> Result<TlvMap> {
    decode(&parse_hex(input)?)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_empty_input_yields_empty_map() {
        let map = decode(&[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_single_byte_tag() {
        let map = decode(&hex!("82023000")).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(Tag::new(0x82)).unwrap().as_ref(), &[0x30, 0x00]);
    }

    #[test]
    fn test_two_byte_tag() {
        // 9F02 (Amount, Authorised) carries a 6-byte value
        let map = decode_hex("9F02060000000010 00").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get(Tag::new(0x9F02)).unwrap().as_ref(),
            &hex!("000000001000")
        );
    }

    #[test]
    fn test_multiple_fields() {
        let map = decode(&hex!("820238008E0401000200")).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains(Tag::new(0x82)));
        assert!(map.contains(Tag::new(0x8E)));
    }

    #[test]
    fn test_duplicate_tag_last_write_wins() {
        let map = decode(&hex!("8202300082023800")).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(Tag::new(0x82)).unwrap().as_ref(), &[0x38, 0x00]);
    }

    #[test]
    fn test_long_form_length() {
        let mut data = vec![0xC0, 0x81, 0x80];
        data.extend(vec![0xAB; 128]);
        let map = decode(&data).unwrap();
        assert_eq!(map.get(Tag::new(0xC0)).unwrap().len(), 128);
    }

    #[test]
    fn test_long_form_two_byte_length() {
        let mut data = vec![0x82, 0x82, 0x01, 0x00];
        data.extend(vec![0x00; 256]);
        let map = decode(&data).unwrap();
        assert_eq!(map.get(Tag::new(0x82)).unwrap().len(), 256);
    }

    #[test]
    fn test_long_form_zero_width_reads_as_empty() {
        // 0x80 declares zero subsequent length bytes; the accumulated
        // length is zero, matching the reference reading
        let map = decode(&hex!("8280")).unwrap();
        assert!(map.get(Tag::new(0x82)).unwrap().is_empty());
    }

    #[test]
    fn test_zero_length_value() {
        let map = decode(&hex!("8E00")).unwrap();
        assert!(map.get(Tag::new(0x8E)).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_second_tag_byte() {
        assert_eq!(decode(&[0x9F]), Err(TlvError::TruncatedTag { offset: 1 }));
    }

    #[test]
    fn test_missing_length() {
        assert_eq!(decode(&[0x82]), Err(TlvError::TruncatedLength { offset: 1 }));
    }

    #[test]
    fn test_truncated_long_form_length() {
        assert_eq!(
            decode(&hex!("828201")),
            Err(TlvError::TruncatedLength { offset: 2 })
        );
    }

    #[test]
    fn test_truncated_value() {
        // declares 5 value bytes, only 2 remain
        assert_eq!(
            decode(&hex!("82053000")),
            Err(TlvError::TruncatedValue {
                offset: 2,
                declared: 5,
                available: 2,
            })
        );
    }

    #[test]
    fn test_length_width_over_four_rejected() {
        assert_eq!(
            decode(&hex!("8285")),
            Err(TlvError::LengthOverflow {
                offset: 1,
                width: 5,
            })
        );
    }

    #[test]
    fn test_decode_hex_whitespace() {
        let map = decode_hex("82 02 38 00").unwrap();
        assert_eq!(map.get(Tag::new(0x82)).unwrap().as_ref(), &[0x38, 0x00]);
    }

    #[test]
    fn test_decode_hex_malformed() {
        assert!(matches!(
            decode_hex("82023"),
            Err(TlvError::InvalidHex(hex::FromHexError::OddLength))
        ));
    }
}
