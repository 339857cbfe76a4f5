// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery level type.
//!
//! The level is always within 0-100%. Every constructor clamps, so out of
//! range input saturates at the nearest bound instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Battery charge as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use smartdev::types::BatteryLevel;
///
/// assert_eq!(BatteryLevel::clamped(150).value(), 100);
/// assert_eq!(BatteryLevel::clamped(-5).value(), 0);
/// assert!(BatteryLevel::clamped(19).is_low());
/// assert!(!BatteryLevel::clamped(20).is_low());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    /// Empty battery (0%).
    pub const EMPTY: Self = Self(0);

    /// Full battery (100%).
    pub const FULL: Self = Self(100);

    /// Levels strictly below this are reported as low.
    pub const LOW_THRESHOLD: u8 = 20;

    /// Creates a battery level, clamping to the valid range.
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        // Safe: the clamp bounds fit in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = value.clamp(0, 100) as u8;
        Self(level)
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the level is below [`Self::LOW_THRESHOLD`].
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.0 < Self::LOW_THRESHOLD
    }

    /// Adds `amount` percentage points, saturating at 0 and 100.
    #[must_use]
    pub fn saturating_add(&self, amount: i32) -> Self {
        Self::clamped(i32::from(self.0).saturating_add(amount))
    }
}

impl Default for BatteryLevel {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<i32> for BatteryLevel {
    fn from(value: i32) -> Self {
        Self::clamped(value)
    }
}

impl From<BatteryLevel> for u8 {
    fn from(value: BatteryLevel) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_clamped_in_range() {
        for v in 0..=100 {
            assert_eq!(i32::from(BatteryLevel::clamped(v).value()), v);
        }
    }

    #[test]
    fn battery_clamped_out_of_range() {
        assert_eq!(BatteryLevel::clamped(-1).value(), 0);
        assert_eq!(BatteryLevel::clamped(i32::MIN).value(), 0);
        assert_eq!(BatteryLevel::clamped(101).value(), 100);
        assert_eq!(BatteryLevel::clamped(i32::MAX).value(), 100);
    }

    #[test]
    fn battery_low_boundary() {
        assert!(BatteryLevel::clamped(0).is_low());
        assert!(BatteryLevel::clamped(19).is_low());
        assert!(!BatteryLevel::clamped(20).is_low());
        assert!(!BatteryLevel::FULL.is_low());
    }

    #[test]
    fn battery_saturating_add() {
        let level = BatteryLevel::clamped(85);
        assert_eq!(level.saturating_add(10).value(), 95);
        assert_eq!(level.saturating_add(30).value(), 100);
        assert_eq!(level.saturating_add(-90).value(), 0);
        assert_eq!(level.saturating_add(i32::MAX).value(), 100);
    }

    #[test]
    fn battery_default_is_full() {
        assert_eq!(BatteryLevel::default(), BatteryLevel::FULL);
    }

    #[test]
    fn battery_display() {
        assert_eq!(BatteryLevel::clamped(42).to_string(), "42%");
    }

    #[test]
    fn battery_deserialize_clamps() {
        let level: BatteryLevel = serde_json::from_str("150").unwrap();
        assert_eq!(level, BatteryLevel::FULL);
    }
}
