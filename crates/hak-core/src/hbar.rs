// SPDX-License-Identifier: MIT OR Apache-2.0

//! HBAR amounts.
//!
//! The ledger accounts in tinybars; users and LLMs speak in display-unit
//! HBAR. Conversions round to the nearest tinybar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tinybars in one HBAR.
pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

/// Convert a display-unit HBAR amount to tinybars, rounding to nearest.
pub fn to_tinybars(amount: f64) -> i64 {
    (amount * TINYBARS_PER_HBAR as f64).round() as i64
}

/// An HBAR amount held in tinybars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hbar(i64);

impl Hbar {
    /// Wrap an exact tinybar amount.
    pub const fn from_tinybars(tinybars: i64) -> Self {
        Self(tinybars)
    }

    /// Convert a display-unit amount.
    pub fn from_display(amount: f64) -> Self {
        Self(to_tinybars(amount))
    }

    /// The amount in tinybars.
    pub const fn to_tinybars(self) -> i64 {
        self.0
    }

    /// The amount in display-unit HBAR.
    pub fn to_display(self) -> f64 {
        self.0 as f64 / TINYBARS_PER_HBAR as f64
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ℏ", self.to_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_to_tinybars() {
        assert_eq!(to_tinybars(1.0), 100_000_000);
        assert_eq!(to_tinybars(0.5), 50_000_000);
        assert_eq!(to_tinybars(0.00000001), 1);
        assert_eq!(to_tinybars(0.0), 0);
    }

    #[test]
    fn round_trip() {
        let h = Hbar::from_display(2.5);
        assert_eq!(h.to_tinybars(), 250_000_000);
        assert_eq!(h.to_display(), 2.5);
    }
}
