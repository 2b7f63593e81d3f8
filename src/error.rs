//! Error types for log operations.

use thiserror::Error;

use crate::model::Offset;

/// Errors returned by log operations.
///
/// The two read-side kinds, [`Error::OutOfRange`] and
/// [`Error::FutureOffset`], are the protocol a reader drives on: `OutOfRange`
/// means the requested offset has been purged (or never existed below the
/// start offset), `FutureOffset` means the reader has caught up with the
/// tail. Both are matchable by variant, no string inspection required:
///
/// ```ignore
/// match log.read(offset).await {
///     Ok(record) => consume(record),
///     Err(Error::FutureOffset(_)) => break, // caught up
///     Err(e) => return Err(e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The offset is below the earliest retained offset, or negative.
    #[error("offset {0} is below the earliest retained offset")]
    OutOfRange(Offset),

    /// The offset is beyond the latest written offset.
    #[error("offset {0} has not been written yet")]
    FutureOffset(Offset),

    /// The log could not be constructed from the given configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An empty payload was passed to a write.
    #[error("record data must not be empty")]
    EmptyRecord,

    /// The payload exceeds the configured maximum record size.
    #[error("record data of {size} bytes exceeds the maximum of {max} bytes")]
    RecordTooLarge {
        /// Size of the rejected payload.
        size: usize,
        /// Configured maximum payload size.
        max: usize,
    },
}

/// Result type for log operations.
pub type Result<T> = std::result::Result<T, Error>;
