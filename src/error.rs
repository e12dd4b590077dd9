//! Error type shared by every sampling operation.

use thiserror::Error;

/// Ways a sampling call can be rejected.
///
/// These are caller-contract violations, not transient conditions: retrying
/// with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// An item's weight was zero or negative.
    ///
    /// `weight` is widened to `i64` regardless of the weight width in use.
    #[error("weight must be > 0 (got {weight} at position {position})")]
    InvalidWeight {
        /// Enumeration position of the offending item.
        position: usize,
        /// The rejected weight.
        weight: i64,
    },

    /// Selection was attempted over zero items.
    #[error("cannot sample from an empty collection")]
    EmptyInput,

    /// String generation was asked for characters from an empty alphabet.
    #[error("cannot draw characters from an empty alphabet")]
    EmptyAlphabet,

    /// The running weight total no longer fits the weight type.
    #[error("total weight overflows {width} at position {position}")]
    WeightOverflow {
        /// Position of the item whose weight pushed the total over.
        position: usize,
        /// Name of the weight type (`"i32"` or `"i64"`).
        width: &'static str,
    },

    /// The selection pass walked past every item without landing on one.
    ///
    /// Only reachable when the weight function returns different values for
    /// the same item within one call.
    #[error("selection pass chose no item (is the weight function pure?)")]
    InternalInvariantViolation,
}
