// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Every mutation of a device is expressed as a [`StateChange`], applied to
//! the [`DeviceState`](super::DeviceState) and then recorded in the audit log.
//! A change renders two audit messages: [`StateChange::describe`] for a change
//! made over the device's lifetime, and [`StateChange::describe_initial`] for
//! the same field supplied at construction.
//!
//! # Examples
//!
//! ```
//! use smartdev::state::{DeviceState, StateChange};
//! use smartdev::types::PowerState;
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::Power(PowerState::On)));
//! assert!(!state.apply(&StateChange::Power(PowerState::On)));
//!
//! let change = StateChange::Location("Kitchen".into());
//! assert_eq!(change.describe(), "Location changed to: Kitchen");
//! assert_eq!(change.describe_initial(), "Device location set to: Kitchen");
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{BatteryLevel, PowerState, Temperature};

/// Represents a change in device state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// Device name changed.
    Name(String),

    /// Device type (category label) changed.
    DeviceType(String),

    /// Location changed.
    Location(String),

    /// Power state was set explicitly.
    Power(PowerState),

    /// Power state was flipped; holds the resulting state.
    Toggled(PowerState),

    /// Battery level was set explicitly (already clamped).
    Battery(BatteryLevel),

    /// Battery was charged.
    Charged {
        /// Percentage points actually applied after clamping.
        delta: i32,
        /// Resulting level.
        level: BatteryLevel,
    },

    /// Temperature was set explicitly.
    Temperature(Temperature),

    /// Temperature was adjusted by a relative delta.
    TemperatureAdjusted {
        /// Value before the adjustment.
        from: Temperature,
        /// Value after the adjustment.
        to: Temperature,
    },
}

impl StateChange {
    /// Creates a charge change from the level before and after charging.
    #[must_use]
    pub fn charged(before: BatteryLevel, after: BatteryLevel) -> Self {
        Self::Charged {
            delta: i32::from(after.value()) - i32::from(before.value()),
            level: after,
        }
    }

    /// Audit message for a change made after construction.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Name(name) => format!("Device name changed to: {name}"),
            Self::DeviceType(ty) => format!("Device type changed to: {ty}"),
            Self::Location(loc) => format!("Location changed to: {loc}"),
            Self::Power(state) => format!("Device power state changed to: {state}"),
            Self::Toggled(state) => format!("Device toggled to: {state}"),
            Self::Battery(level) => format!("Battery level set to: {level}"),
            Self::Charged { delta, level } => {
                format!("Battery charged by {delta}%. New level: {level}")
            }
            Self::Temperature(temp) => format!("Temperature set to: {temp}"),
            Self::TemperatureAdjusted { from, to } => {
                format!("Temperature adjusted from {from} to {to}")
            }
        }
    }

    /// Audit message for a field supplied at construction.
    #[must_use]
    pub fn describe_initial(&self) -> String {
        match self {
            Self::Name(name) => format!("Device name set to: {name}"),
            Self::DeviceType(ty) => format!("Device type set to: {ty}"),
            Self::Location(loc) => format!("Device location set to: {loc}"),
            Self::Power(state) => format!("Device power state set to: {state}"),
            _ => self.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charged_computes_applied_delta() {
        let change = StateChange::charged(BatteryLevel::clamped(95), BatteryLevel::FULL);
        assert_eq!(
            change,
            StateChange::Charged {
                delta: 5,
                level: BatteryLevel::FULL,
            }
        );
        assert_eq!(change.describe(), "Battery charged by 5%. New level: 100%");
    }

    #[test]
    fn describe_messages() {
        assert_eq!(
            StateChange::Name("Main Hub".into()).describe(),
            "Device name changed to: Main Hub"
        );
        assert_eq!(
            StateChange::DeviceType("Control Center".into()).describe(),
            "Device type changed to: Control Center"
        );
        assert_eq!(
            StateChange::Power(PowerState::On).describe(),
            "Device power state changed to: ON"
        );
        assert_eq!(
            StateChange::Toggled(PowerState::Off).describe(),
            "Device toggled to: OFF"
        );
        assert_eq!(
            StateChange::Battery(BatteryLevel::clamped(55)).describe(),
            "Battery level set to: 55%"
        );
        assert_eq!(
            StateChange::TemperatureAdjusted {
                from: Temperature::new(20.0),
                to: Temperature::new(17.5),
            }
            .describe(),
            "Temperature adjusted from 20.0°C to 17.5°C"
        );
    }

    #[test]
    fn describe_initial_messages() {
        assert_eq!(
            StateChange::Name("Kitchen Light".into()).describe_initial(),
            "Device name set to: Kitchen Light"
        );
        assert_eq!(
            StateChange::DeviceType("Light Switch".into()).describe_initial(),
            "Device type set to: Light Switch"
        );
        assert_eq!(
            StateChange::Power(PowerState::On).describe_initial(),
            "Device power state set to: ON"
        );
        assert_eq!(
            StateChange::Temperature(Temperature::new(22.5)).describe_initial(),
            "Temperature set to: 22.5°C"
        );
    }
}
