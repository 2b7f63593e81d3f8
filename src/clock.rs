//! Injectable time source for record metadata.
//!
//! The log never reads the system clock directly. It calls through the
//! [`Clock`] trait so tests can substitute a deterministic implementation.

use std::sync::RwLock;
use std::time::{Duration, SystemTime};

/// A source of wall-clock timestamps.
///
/// Implementations must be safe to call from multiple threads; `now` is a
/// pure read with no side effects on the log.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// The production clock, backed by [`SystemTime::now`].
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A controllable clock for tests.
///
/// Time only moves when the test tells it to, making record timestamps
/// deterministic.
///
/// # Example
///
/// ```
/// use std::time::{Duration, SystemTime};
/// use memlog::{Clock, MockClock};
///
/// let clock = MockClock::at(SystemTime::UNIX_EPOCH);
/// clock.advance(Duration::from_secs(60));
/// assert_eq!(clock.now(), SystemTime::UNIX_EPOCH + Duration::from_secs(60));
/// ```
#[derive(Debug)]
pub struct MockClock {
    now: RwLock<SystemTime>,
}

impl MockClock {
    /// Creates a mock clock frozen at the given instant.
    pub fn at(time: SystemTime) -> Self {
        Self {
            now: RwLock::new(time),
        }
    }

    /// Creates a mock clock frozen at the current system time.
    pub fn new() -> Self {
        Self::at(SystemTime::now())
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.write().expect("clock lock poisoned");
        *now += duration;
    }

    /// Sets the clock to an absolute instant.
    pub fn set(&self, time: SystemTime) {
        *self.now.write().expect("clock lock poisoned") = time;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> SystemTime {
        *self.now.read().expect("clock lock poisoned")
    }
}
