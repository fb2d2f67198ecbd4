//! Error types for TLV decoding

/// Result type for TLV operations
pub type Result<T> = std::result::Result<T, TlvError>;

/// Errors produced while decoding a BER-TLV stream or its hex rendering
///
/// Decode errors abort the whole decode call; no partial map is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TlvError {
    /// Input ended while reading the second byte of a two-byte tag
    #[error("unexpected end of input while reading tag at offset {offset}")]
    TruncatedTag {
        /// Offset at which the missing byte was expected
        offset: usize,
    },

    /// Input ended while reading a length
    #[error("unexpected end of input while reading length at offset {offset}")]
    TruncatedLength {
        /// Offset at which the missing byte was expected
        offset: usize,
    },

    /// A value runs past the end of the input
    #[error("value at offset {offset} declares {declared} bytes but only {available} remain")]
    TruncatedValue {
        /// Offset at which the value starts
        offset: usize,
        /// Length the field declared
        declared: usize,
        /// Bytes actually remaining in the input
        available: usize,
    },

    /// A long-form length wider than the supported 4 bytes
    #[error("long-form length of {width} bytes at offset {offset} is not supported")]
    LengthOverflow {
        /// Offset of the leading length byte
        offset: usize,
        /// Declared width in bytes
        width: usize,
    },

    /// A tag rendering that is not one or two bytes
    #[error("tag of {len} bytes is outside the supported 1..=2 byte range")]
    InvalidTagLength {
        /// Number of bytes the rendering decoded to
        len: usize,
    },

    /// Malformed hex input (odd length or a non-hex character)
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
