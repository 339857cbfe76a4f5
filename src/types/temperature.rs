// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature reading in degrees Celsius.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Temperature in degrees Celsius.
///
/// Unlike [`BatteryLevel`](super::BatteryLevel) the value is not clamped.
/// Values below [`Temperature::MIN_OPERATING`] or above
/// [`Temperature::MAX_OPERATING`] are only flagged by diagnostics.
///
/// # Examples
///
/// ```
/// use smartdev::types::Temperature;
///
/// let t = Temperature::new(22.5);
/// assert_eq!(t.to_string(), "22.5°C");
/// assert!(!t.is_out_of_operating_range());
/// assert!(Temperature::new(41.0).is_out_of_operating_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f32);

impl Temperature {
    /// Lowest normal operating temperature.
    pub const MIN_OPERATING: f32 = 0.0;

    /// Highest normal operating temperature.
    pub const MAX_OPERATING: f32 = 40.0;

    /// Creates a temperature reading.
    #[must_use]
    pub const fn new(celsius: f32) -> Self {
        Self(celsius)
    }

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f32 {
        self.0
    }

    /// Returns `true` if the value is below 0°C or above 40°C.
    ///
    /// A NaN reading compares false on both sides and is not flagged.
    #[must_use]
    #[allow(clippy::manual_range_contains)] // `contains` would flag NaN
    pub fn is_out_of_operating_range(&self) -> bool {
        self.0 < Self::MIN_OPERATING || self.0 > Self::MAX_OPERATING
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(20.0)
    }
}

impl Add<f32> for Temperature {
    type Output = Self;

    fn add(self, delta: f32) -> Self::Output {
        Self(self.0 + delta)
    }
}

impl From<f32> for Temperature {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}
