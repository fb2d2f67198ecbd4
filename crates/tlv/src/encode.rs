//! Wire encoding of tag/value fields
//!
//! The inverse of [`decode()`](crate::decode()): tag bytes, minimal short- or
//! long-form length, then the value. Used to build fixtures and to
//! re-serialize decoded maps.

use bytes::{Bytes, BytesMut};

use crate::decode::TlvMap;
use crate::tag::Tag;

/// Encode a single tag/value field to wire form
pub fn encode_field(tag: Tag, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + 5 + value.len());
    out.extend_from_slice(&tag.to_bytes());
    out.extend_from_slice(&encode_length(value.len()));
    out.extend_from_slice(value);
    out
}

/// Encode a length in minimal form: short for 0–127, long above
pub fn encode_length(length: usize) -> Vec<u8> {
    if length < 0x80 {
        vec![length as u8]
    } else if length <= 0xFF {
        vec![0x81, length as u8]
    } else if length <= 0xFFFF {
        vec![0x82, (length >> 8) as u8, length as u8]
    } else if length <= 0xFF_FFFF {
        vec![0x83, (length >> 16) as u8, (length >> 8) as u8, length as u8]
    } else {
        vec![
            0x84,
            (length >> 24) as u8,
            (length >> 16) as u8,
            (length >> 8) as u8,
            length as u8,
        ]
    }
}

impl TlvMap {
    /// Re-encode every entry to wire form
    ///
    /// Entry order is unspecified; decoding the result yields this map
    /// again for any map whose value lengths fit the 4-byte long form.
    pub fn to_bytes(&self) -> Bytes {
        let mut out = BytesMut::new();
        for (tag, value) in self.iter() {
            out.extend_from_slice(&encode_field(tag, value));
        }
        out.freeze()
    }
}
