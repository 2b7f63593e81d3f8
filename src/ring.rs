//! The segment ring: ordered live segments, roll-over, and purge.
//!
//! The ring owns every live [`Segment`] and is the single authority on
//! offset allocation and retention. It is not internally synchronized; the
//! [`Log`](crate::Log) facade wraps it in a lock and serializes mutation.

use std::collections::VecDeque;
use std::time::SystemTime;

use bytes::Bytes;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Metadata, Offset, Record, OFFSET_NONE};
use crate::segment::Segment;

/// Number of segments the ring retains: the active tail plus one sealed
/// history segment. Opening a segment beyond this purges the oldest one.
pub(crate) const MAX_SEGMENTS: usize = 2;

/// Ordered collection of live segments.
///
/// Segments appear in strictly increasing, offset-contiguous base order. The
/// last segment is the active (writable) tail; all earlier segments are
/// sealed. The ring is created empty and opens its first segment at
/// `start_offset` on the first append.
#[derive(Debug)]
pub(crate) struct SegmentRing {
    segments: VecDeque<Segment>,
    segment_size: usize,
    start_offset: Offset,
}

impl SegmentRing {
    /// Creates an empty ring whose first segment will start at `start_offset`.
    pub(crate) fn new(start_offset: Offset, segment_size: usize) -> Self {
        Self {
            segments: VecDeque::with_capacity(MAX_SEGMENTS),
            segment_size,
            start_offset,
        }
    }

    /// Appends a record and returns its assigned offset.
    ///
    /// Rolls to a new segment when the tail is sealed and purges the ring
    /// head when retention would be exceeded. Callers must hold exclusive
    /// access for the whole call; readers never observe a partial roll.
    pub(crate) fn append(&mut self, data: Bytes, created: SystemTime) -> Offset {
        self.ensure_open_tail();
        let active = self
            .segments
            .back_mut()
            .expect("ring has an open tail after ensure_open_tail");

        let offset = active.next_offset();
        let appended = active.append(Record {
            metadata: Metadata { offset, created },
            data,
        });
        debug_assert!(appended, "open tail rejected an append");

        offset
    }

    /// Reads the record at `offset`.
    ///
    /// Fails with [`Error::OutOfRange`] when the offset is negative or below
    /// the retained window, and with [`Error::FutureOffset`] when it is
    /// beyond the tail (every read on an empty ring is a future read).
    pub(crate) fn read(&self, offset: Offset) -> Result<Record> {
        if offset < 0 {
            return Err(Error::OutOfRange(offset));
        }

        let Some(front) = self.segments.front() else {
            // Nothing written yet: every non-negative offset lies ahead.
            return Err(Error::FutureOffset(offset));
        };

        let earliest = front.base_offset();
        if offset < earliest {
            return Err(Error::OutOfRange(offset));
        }

        // Segments are contiguous and equally sized, so the owner is found
        // by direct index rather than a scan.
        let index = (offset - earliest) as usize / self.segment_size;
        self.segments
            .get(index)
            .and_then(|segment| segment.read(offset))
            .ok_or(Error::FutureOffset(offset))
    }

    /// Returns the `(earliest, latest)` readable offsets.
    ///
    /// Both values are [`OFFSET_NONE`] until the first append. The pair is
    /// consistent: the ring never reports `latest < earliest`.
    pub(crate) fn range(&self) -> (Offset, Offset) {
        match (self.segments.front(), self.segments.back()) {
            (Some(front), Some(tail)) => (front.base_offset(), tail.latest_offset()),
            _ => (OFFSET_NONE, OFFSET_NONE),
        }
    }

    /// Makes sure the tail segment can accept one more record.
    ///
    /// Opens the first segment at `start_offset`, or rolls past a sealed
    /// tail into a fresh segment, purging the head when the ring is at
    /// capacity. Roll and purge happen in the same step, so the earliest
    /// offset is never ambiguous.
    fn ensure_open_tail(&mut self) {
        let next_base = match self.segments.back() {
            None => self.start_offset,
            Some(tail) if tail.is_sealed() => tail.base_offset() + self.segment_size as Offset,
            Some(_) => return,
        };

        if self.segments.len() == MAX_SEGMENTS {
            if let Some(purged) = self.segments.pop_front() {
                debug!(
                    base_offset = purged.base_offset(),
                    records = purged.len(),
                    "purged oldest segment"
                );
            }
        }

        debug!(base_offset = next_base, "opened new active segment");
        self.segments
            .push_back(Segment::new(next_base, self.segment_size));
    }
}
