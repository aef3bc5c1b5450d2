// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ledger timestamps (seconds + nanoseconds since the Unix epoch).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgentKitError;

/// A consensus timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Nanosecond remainder.
    pub nanos: u32,
}

impl Timestamp {
    /// Build from an explicit seconds/nanos pair.
    pub const fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Convert from a UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos(),
        }
    }
}

impl FromStr for Timestamp {
    type Err = AgentKitError;

    /// Parse an ISO-8601 / RFC 3339 datetime string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        DateTime::parse_from_rfc3339(normalized)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|e| {
                AgentKitError::Validation(format!("invalid ISO-8601 timestamp {normalized:?}: {e}"))
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}
