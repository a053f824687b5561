use std::fmt;

/// Errors that can occur when operating on a `LinkedSequence` through
/// a `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The position no longer names a live element of the sequence.
    StalePosition,
    /// The position names one of the two boundary sentinels.
    Sentinel,
    /// An insertion anchored on a sentinel would place the new
    /// element outside of the header/trailer pair.
    OutsideSentinels,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::StalePosition => f.write_str("stale or foreign position"),
            SequenceError::Sentinel => f.write_str("cannot remove sentinel"),
            SequenceError::OutsideSentinels => f.write_str("cannot insert outside the sentinels"),
        }
    }
}

impl std::error::Error for SequenceError {}
