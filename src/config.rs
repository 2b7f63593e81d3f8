//! Configuration for constructing a [`Log`](crate::Log).
//!
//! [`LogConfig`] gathers every tunable in one place and is validated as a
//! whole by [`Log::new`](crate::Log::new). Builder-style `with_*` methods
//! cover the common case of overriding one or two settings:
//!
//! ```
//! use memlog::{Log, LogConfig};
//!
//! let log = Log::new(LogConfig::default().with_start_offset(100)).unwrap();
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::model::Offset;

/// First offset assigned by a log unless overridden.
pub const DEFAULT_START_OFFSET: Offset = 0;

/// Default capacity of each segment, in records.
///
/// Together with the ring retaining two segments this bounds the default
/// readable history at 1024 records.
pub const DEFAULT_MAX_SEGMENT_SIZE: usize = 512;

/// Default upper bound on a single record payload, in bytes.
pub const DEFAULT_MAX_RECORD_SIZE: usize = 1024 * 1024;

/// Configuration for a [`Log`](crate::Log).
///
/// All settings have working defaults; construct with [`Default`] and adjust
/// with the `with_*` methods. Validation happens in
/// [`Log::new`](crate::Log::new), which rejects a negative start offset and
/// zero-valued sizes with [`Error::Config`](crate::Error::Config).
#[derive(Clone)]
pub struct LogConfig {
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) start_offset: Offset,
    pub(crate) max_segment_size: usize,
    pub(crate) max_record_size: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            start_offset: DEFAULT_START_OFFSET,
            max_segment_size: DEFAULT_MAX_SEGMENT_SIZE,
            max_record_size: DEFAULT_MAX_RECORD_SIZE,
        }
    }
}

impl LogConfig {
    /// Replaces the timestamp source used for record metadata.
    ///
    /// Defaults to [`SystemClock`]. Tests typically inject a
    /// [`MockClock`](crate::MockClock) here.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the first offset this log will assign.
    ///
    /// Must be non-negative. Seeding a fresh log with a checkpointed offset
    /// is how a reader resumes after the previous log instance is gone.
    pub fn with_start_offset(mut self, offset: Offset) -> Self {
        self.start_offset = offset;
        self
    }

    /// Sets the capacity of each segment, in records.
    ///
    /// Must be greater than zero. Smaller segments purge history in finer
    /// increments; larger segments retain more.
    pub fn with_max_segment_size(mut self, size: usize) -> Self {
        self.max_segment_size = size;
        self
    }

    /// Sets the largest accepted record payload, in bytes.
    ///
    /// Must be greater than zero. Writes with larger payloads fail with
    /// [`Error::RecordTooLarge`](crate::Error::RecordTooLarge).
    pub fn with_max_record_size(mut self, size: usize) -> Self {
        self.max_record_size = size;
        self
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogConfig")
            .field("start_offset", &self.start_offset)
            .field("max_segment_size", &self.max_segment_size)
            .field("max_record_size", &self.max_record_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_provide_working_defaults() {
        let config = LogConfig::default();

        assert_eq!(config.start_offset, DEFAULT_START_OFFSET);
        assert_eq!(config.max_segment_size, DEFAULT_MAX_SEGMENT_SIZE);
        assert_eq!(config.max_record_size, DEFAULT_MAX_RECORD_SIZE);
    }

    #[test]
    fn should_apply_builder_overrides() {
        let config = LogConfig::default()
            .with_start_offset(42)
            .with_max_segment_size(8)
            .with_max_record_size(128);

        assert_eq!(config.start_offset, 42);
        assert_eq!(config.max_segment_size, 8);
        assert_eq!(config.max_record_size, 128);
    }

    #[test]
    fn should_not_leak_clock_in_debug_output() {
        let rendered = format!("{:?}", LogConfig::default());

        assert!(rendered.contains("start_offset"));
        assert!(!rendered.contains("clock"));
    }
}
