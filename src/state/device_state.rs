// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BatteryLevel, PowerState, Temperature};

use super::StateChange;

/// Default device name.
pub const DEFAULT_NAME: &str = "Unknown";
/// Default device type.
pub const DEFAULT_TYPE: &str = "Generic";
/// Default location.
pub const DEFAULT_LOCATION: &str = "Not set";

/// Configuration and runtime state of a device.
///
/// `DeviceState` is plain data: it performs no logging. The
/// [`Device`](crate::Device) wraps it and records every change it applies.
///
/// The [`Display`](fmt::Display) implementation renders the multi-line
/// status report.
///
/// # Examples
///
/// ```
/// use smartdev::state::DeviceState;
///
/// let state = DeviceState::new();
/// assert_eq!(
///     state.to_string(),
///     "Device: Unknown (Generic)\n\
///      Location: Not set\n\
///      Power: OFF\n\
///      Battery: 100%\n\
///      Temperature: 20.0°C"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    name: String,
    device_type: String,
    location: String,
    power: PowerState,
    battery: BatteryLevel,
    temperature: Temperature,
}

impl DeviceState {
    /// Creates a state with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the device type.
    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the battery level.
    #[must_use]
    pub fn battery(&self) -> BatteryLevel {
        self.battery
    }

    /// Returns the temperature.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Name(name) => replace(&mut self.name, name.clone()),
            StateChange::DeviceType(ty) => replace(&mut self.device_type, ty.clone()),
            StateChange::Location(loc) => replace(&mut self.location, loc.clone()),
            StateChange::Power(state) | StateChange::Toggled(state) => {
                replace(&mut self.power, *state)
            }
            StateChange::Battery(level) | StateChange::Charged { level, .. } => {
                replace(&mut self.battery, *level)
            }
            StateChange::Temperature(temp) | StateChange::TemperatureAdjusted { to: temp, .. } => {
                replace(&mut self.temperature, *temp)
            }
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            device_type: DEFAULT_TYPE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            power: PowerState::Off,
            battery: BatteryLevel::FULL,
            temperature: Temperature::default(),
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Device: {} ({})", self.name, self.device_type)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Power: {}", self.power)?;
        writeln!(f, "Battery: {}", self.battery)?;
        write!(f, "Temperature: {}", self.temperature)
    }
}
