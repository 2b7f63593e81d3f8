//! Core data types for the record log.
//!
//! This module defines the fundamental data structures used throughout the
//! log API: offsets, record metadata, and the records themselves.

use std::time::SystemTime;

use bytes::Bytes;

/// Position of a record in the logical stream.
///
/// Offsets are assigned by the log at write time and are strictly
/// monotonically increasing with step 1 across successful writes. Valid
/// offsets are non-negative; [`OFFSET_NONE`] is reserved as the "no offset"
/// sentinel.
pub type Offset = i64;

/// Sentinel meaning "no valid offset".
///
/// Returned by [`Log::range`](crate::Log::range) for both bounds while the
/// log has never accepted a write.
pub const OFFSET_NONE: Offset = -1;

/// Metadata the log assigns to a record at write time.
///
/// Never mutated after the write that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// The offset assigned to this record.
    pub offset: Offset,

    /// Wall-clock time at which the record was appended, taken from the
    /// configured [`Clock`](crate::Clock).
    pub created: SystemTime,
}

/// A record stored in the log.
///
/// Records pair an opaque payload with the metadata assigned at append time.
/// The log does not inspect or transform the payload.
///
/// # Payload Sharing
///
/// The payload is held as [`Bytes`], so cloning a record is cheap and a
/// record handed out by [`Log::read`](crate::Log::read) remains valid for as
/// long as the caller holds it, even after the owning segment has been
/// purged from the log.
///
/// # Example
///
/// ```ignore
/// let record = log.read(42).await?;
/// assert_eq!(record.metadata.offset, 42);
/// process(&record.data);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Offset and timestamp assigned by the log.
    pub metadata: Metadata,

    /// The opaque record payload.
    pub data: Bytes,
}
