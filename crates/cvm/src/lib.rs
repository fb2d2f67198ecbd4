//! Cardholder verification method (CVM) policy evaluation for EMV cards
//!
//! Answers one question about a payment card: will it always demand an
//! offline PIN? The answer is derived from two data objects the card
//! returns, the Application Interchange Profile (tag `82`) and the CVM List
//! (tag `8E`): the card must advertise cardholder verification in the AIP,
//! and the offline-PIN method must sit at the top of its CVM List.
//!
//! Inputs arrive either as a decoded [`pinsight_tlv::TlvMap`] or as per-tag
//! hex strings / byte buffers; missing tags are a normal input and fold
//! into a `false` answer rather than an error.
//!
//! ```
//! use pinsight_cvm::{CardTags, Evaluator};
//!
//! let tags = CardTags::new().with_aip("38 00").with_cvm_list("01000200");
//! let verdict = Evaluator::new().verdict(&tags).unwrap();
//! assert!(verdict.will_always_request_pin);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

mod error;
mod policy;
pub mod tags;
mod types;

pub use error::{Error, Result};
pub use policy::{Evaluator, OFFLINE_PLAINTEXT_PIN, Report, Verdict};
pub use types::{Aip, AipFlag, CardTags, CvmEntry, CvmList, TagValue, describe_cvm_code};

/// Whether the card described by `tags` will always request a PIN
///
/// Shorthand for [`Evaluator::verdict`] with the default offline-PIN code.
pub fn will_always_request_pin(tags: &CardTags) -> Result<bool> {
    Ok(Evaluator::new().verdict(tags)?.will_always_request_pin)
}

/// Human-readable explanation of the PIN verdict for `tags`
///
/// Shorthand for rendering [`Evaluator::report`] with the default
/// offline-PIN code.
pub fn explain(tags: &CardTags) -> Result<String> {
    Ok(Evaluator::new().report(tags)?.to_string())
}
