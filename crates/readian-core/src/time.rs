//! Timestamp type for expiry checks
//!
//! The policy evaluator takes the current time as an explicit argument so
//! evaluation stays a pure function; nothing in the policy path reads the
//! wall clock. [`Timestamp::now`] exists for callers at the outermost edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time, as whole seconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create from whole seconds since the Unix epoch
    pub const fn from_unix(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Seconds since the Unix epoch
    pub const fn unix_seconds(&self) -> i64 {
        self.0
    }

    /// The current wall-clock time
    ///
    /// For use by edge callers only; pass the result down rather than
    /// calling this inside decision logic.
    pub fn now() -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self(seconds as i64)
    }

    /// True if this timestamp is strictly earlier than `other`
    pub fn is_before(&self, other: Timestamp) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}
