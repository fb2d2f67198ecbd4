//! Hex string input handling

use crate::error::Result;

/// Decode a hex string into bytes, ignoring ASCII whitespace between digits
///
/// Card tag values are routinely pasted with spaces between pairs
/// (`"38 00"`); those are stripped before decoding. Odd-length input or a
/// non-hex character fails with [`TlvError::InvalidHex`], never a silent
/// empty-bytes fallback.
///
/// [`TlvError::InvalidHex`]: crate::TlvError::InvalidHex
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(hex::decode(compact)?)
}
