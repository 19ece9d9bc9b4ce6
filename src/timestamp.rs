//! Run timestamp used to namespace one invocation's output directory.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sortable `YYYYMMDD-HHmmss` timestamp, computed once at startup.
///
/// All screenshots from one run share the same `RunTimestamp`, so every
/// output file for that run lands in a single directory. The value is
/// immutable for the lifetime of the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunTimestamp(String);

impl RunTimestamp {
    /// Capture the current local time as the run timestamp.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Format an explicit point in time. Month and day are calendar values
    /// (1-indexed); every field is zero-padded to fixed width.
    pub fn from_datetime(when: NaiveDateTime) -> Self {
        Self(when.format("%Y%m%d-%H%M%S").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
