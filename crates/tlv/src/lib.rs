//! Flat BER-TLV decoding and encoding for EMV payment card data
//!
//! EMV cards hand their data objects back as BER-TLV encoded byte streams.
//! This crate decodes such a stream into a [`TlvMap`] from [`Tag`] to raw
//! value bytes, and re-encodes a map back into wire form. Input may be raw
//! bytes or a hex string (ASCII whitespace between pairs is ignored).
//!
//! Two scope limits are inherited from the data sets this crate is run
//! against and are deliberate rather than omissions:
//!
//! - Tags longer than two bytes are not supported.
//! - Constructed (template) tags are not descended into; every value is
//!   read as a flat primitive.
//!
//! ```
//! use pinsight_tlv::{Tag, decode_hex};
//!
//! let tags = decode_hex("82 02 3800 8E 04 01000200").unwrap();
//! assert_eq!(tags.get(Tag::new(0x82)).unwrap().as_ref(), &[0x38, 0x00]);
//! assert_eq!(tags.get(Tag::new(0x8E)).unwrap().len(), 4);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

mod decode;
mod encode;
mod error;
mod hexstr;
mod tag;

pub use decode::{TlvMap, decode, decode_hex};
pub use encode::{encode_field, encode_length};
pub use error::{Result, TlvError};
pub use hexstr::parse_hex;
pub use tag::Tag;
