//! Core log implementation with read and write APIs.
//!
//! This module provides the [`Log`] struct, the primary entry point of the
//! crate. It combines the offset-allocating segment ring with the configured
//! clock and exposes [`write`](Log::write), [`read`](Log::read), and
//! [`range`](Log::range).

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::config::LogConfig;
use crate::error::{Error, Result};
use crate::model::{Offset, Record};
use crate::ring::SegmentRing;

/// An in-memory, offset-addressable, append-only record log.
///
/// Records are appended to the tail and read back at random by offset. A
/// bounded window of history is retained; as the log advances, the oldest
/// segment is purged and its offsets become permanently unreadable.
///
/// # Thread Safety
///
/// `Log` is designed to be shared across tasks. All methods take `&self`;
/// writes are serialized behind an exclusive guard while reads proceed
/// concurrently under a shared guard. A `write` whose future is dropped
/// before it acquires the guard has no effect; once the guard is held the
/// append runs to completion.
///
/// # Checkpoint & Resume
///
/// The log holds no state beyond its own memory. A consumer that checkpoints
/// the offsets it has processed can resume after a restart by constructing a
/// fresh log seeded at the checkpoint and replaying the source stream:
///
/// ```
/// use memlog::{Log, LogConfig};
///
/// let resumed = Log::new(LogConfig::default().with_start_offset(10)).unwrap();
/// ```
///
/// Reading past the tail fails with [`Error::FutureOffset`], which doubles
/// as the "caught up" signal for such readers.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use memlog::{Log, LogConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> memlog::Result<()> {
/// let log = Log::new(LogConfig::default())?;
///
/// let offset = log.write(Bytes::from("event-1")).await?;
/// let record = log.read(offset).await?;
/// assert_eq!(record.data, Bytes::from("event-1"));
///
/// let (earliest, latest) = log.range().await;
/// assert_eq!((earliest, latest), (offset, offset));
/// # Ok(())
/// # }
/// ```
pub struct Log {
    clock: Arc<dyn Clock>,
    max_record_size: usize,
    inner: RwLock<SegmentRing>,
}

impl Log {
    /// Creates a log from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the start offset is negative or either
    /// size is zero. No log is constructed in that case.
    pub fn new(config: LogConfig) -> Result<Self> {
        if config.start_offset < 0 {
            return Err(Error::Config(format!(
                "start offset must not be negative, got {}",
                config.start_offset
            )));
        }
        if config.max_segment_size == 0 {
            return Err(Error::Config(
                "max segment size must be greater than zero".to_string(),
            ));
        }
        if config.max_record_size == 0 {
            return Err(Error::Config(
                "max record size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            clock: config.clock,
            max_record_size: config.max_record_size,
            inner: RwLock::new(SegmentRing::new(
                config.start_offset,
                config.max_segment_size,
            )),
        })
    }

    /// Appends a record and returns its assigned offset.
    ///
    /// The payload is validated before any state changes: it must be
    /// non-empty and no larger than the configured maximum record size. The
    /// record is stamped with the current time from the configured clock.
    ///
    /// Offsets assigned across concurrent writes are all distinct and
    /// contiguous; which caller obtains which offset is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRecord`] or [`Error::RecordTooLarge`] when the
    /// payload is rejected. A failed write has no side effect.
    pub async fn write(&self, data: Bytes) -> Result<Offset> {
        if data.is_empty() {
            return Err(Error::EmptyRecord);
        }
        if data.len() > self.max_record_size {
            return Err(Error::RecordTooLarge {
                size: data.len(),
                max: self.max_record_size,
            });
        }

        let created = self.clock.now();
        let mut ring = self.inner.write().await;
        Ok(ring.append(data, created))
    }

    /// Returns the record at `offset`.
    ///
    /// The returned record's `metadata.offset` equals `offset` exactly, and
    /// its payload stays valid for as long as the caller holds it,
    /// regardless of later purges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the offset is negative or has been
    /// purged, and [`Error::FutureOffset`] when it has not been written yet
    /// (on an empty log, every read).
    pub async fn read(&self, offset: Offset) -> Result<Record> {
        let ring = self.inner.read().await;
        ring.read(offset)
    }

    /// Returns the `(earliest, latest)` readable offsets.
    ///
    /// Both values are [`OFFSET_NONE`](crate::OFFSET_NONE) until the first
    /// successful write. Otherwise both are valid offsets with
    /// `earliest <= latest`, snapshotted atomically with respect to each
    /// other.
    pub async fn range(&self) -> (Offset, Offset) {
        let ring = self.inner.read().await;
        ring.range()
    }
}
