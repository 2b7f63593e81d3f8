//! An in-memory, offset-addressable, segmented append-only record log.
//!
//! The log holds a single logical stream of opaque byte-payload records.
//! Every successful write is assigned a strictly monotonic 64-bit offset,
//! and records are read back at random by offset. History is bounded: the
//! log retains a fixed number of segments and purges the oldest one as the
//! stream advances, so offsets below the retained window become permanently
//! unreadable.
//!
//! # Architecture
//!
//! Writes flow through a segment ring. The ring's tail segment accepts
//! appends until it reaches capacity and seals; the next write rolls into a
//! fresh segment and, when retention would be exceeded, purges the ring
//! head in the same step. Offset allocation, append, roll, and purge all
//! happen under one exclusive critical section, while reads share access
//! and proceed concurrently.
//!
//! # Key Concepts
//!
//! - **[`Log`]**: the entry point; combines the segment ring with a
//!   configurable [`Clock`] and exposes `write`, `read`, and `range`.
//! - **Offsets**: `i64` positions in the stream. [`OFFSET_NONE`] (`-1`)
//!   means "no offset" and is what [`Log::range`] reports on an empty log.
//! - **Checkpointing**: consumers persist the offsets they processed and
//!   resume by seeding a fresh log with
//!   [`LogConfig::with_start_offset`]. [`Error::FutureOffset`] tells a
//!   resuming reader it has caught up with the tail.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use memlog::{Error, Log, LogConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> memlog::Result<()> {
//! let log = Log::new(LogConfig::default())?;
//!
//! log.write(Bytes::from("event-0")).await?;
//! log.write(Bytes::from("event-1")).await?;
//!
//! let (earliest, latest) = log.range().await;
//! for offset in earliest..=latest {
//!     let record = log.read(offset).await?;
//!     println!("offset={} payload={:?}", offset, record.data);
//! }
//!
//! // The tail has no record yet.
//! assert!(matches!(log.read(latest + 1).await, Err(Error::FutureOffset(_))));
//! # Ok(())
//! # }
//! ```

mod clock;
mod config;
mod error;
mod log;
mod model;
mod ring;
mod segment;

pub use clock::{Clock, MockClock, SystemClock};
pub use config::{
    LogConfig, DEFAULT_MAX_RECORD_SIZE, DEFAULT_MAX_SEGMENT_SIZE, DEFAULT_START_OFFSET,
};
pub use error::{Error, Result};
pub use log::Log;
pub use model::{Metadata, Offset, Record, OFFSET_NONE};
