//! Error types for policy evaluation

use pinsight_tlv::TlvError;

/// Result type for policy evaluation
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for policy evaluation
///
/// Missing card tags are not errors; absence folds into a `false` policy
/// answer. Only malformed input surfaces here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed TLV stream or hex rendering
    #[error(transparent)]
    Tlv(#[from] TlvError),
}
