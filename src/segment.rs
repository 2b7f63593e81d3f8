//! Fixed-capacity segment storage.
//!
//! A [`Segment`] is an append-only array of records covering one contiguous
//! offset range `[base_offset, base_offset + capacity)`. Segments hold no
//! synchronization of their own; the ring serializes all access.

use crate::model::{Offset, Record};

/// A fixed-capacity, append-only store for one contiguous offset range.
///
/// A segment is *sealed* once it holds `capacity` records. Sealed segments
/// are logically immutable: [`Segment::append`] refuses further records and
/// reads never fail for in-range offsets.
#[derive(Debug)]
pub(crate) struct Segment {
    base_offset: Offset,
    capacity: usize,
    records: Vec<Record>,
}

impl Segment {
    /// Creates an empty segment covering `[base_offset, base_offset + capacity)`.
    pub(crate) fn new(base_offset: Offset, capacity: usize) -> Self {
        Self {
            base_offset,
            capacity,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Returns the first offset covered by this segment.
    pub(crate) fn base_offset(&self) -> Offset {
        self.base_offset
    }

    /// Returns the number of records written so far.
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the offset the next append will occupy.
    pub(crate) fn next_offset(&self) -> Offset {
        self.base_offset + self.records.len() as Offset
    }

    /// Returns the offset of the most recently written record.
    ///
    /// Only meaningful when the segment is non-empty.
    pub(crate) fn latest_offset(&self) -> Offset {
        self.base_offset + self.records.len() as Offset - 1
    }

    /// Returns `true` once the segment has reached capacity.
    pub(crate) fn is_sealed(&self) -> bool {
        self.records.len() == self.capacity
    }

    /// Appends a record at the next free slot.
    ///
    /// Returns `false` without modifying the segment when it is sealed. The
    /// record's offset must equal [`Segment::next_offset`].
    pub(crate) fn append(&mut self, record: Record) -> bool {
        if self.is_sealed() {
            return false;
        }
        debug_assert_eq!(record.metadata.offset, self.next_offset());
        self.records.push(record);
        true
    }

    /// Reads the record at the given absolute offset.
    ///
    /// Returns `None` when the offset is below `base_offset` or addresses a
    /// slot that has not been written yet.
    pub(crate) fn read(&self, offset: Offset) -> Option<Record> {
        if offset < self.base_offset {
            return None;
        }
        let index = (offset - self.base_offset) as usize;
        self.records.get(index).cloned()
    }
}
