// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device construction options.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::state::StateChange;
use crate::types::{BatteryLevel, PowerState, Temperature};

/// Options used to construct a [`Device`](crate::Device).
///
/// Every field is optional; omitted fields take the device defaults
/// (`"Unknown"`, `"Generic"`, `"Not set"`, off, 100%, 20.0°C).
///
/// # Examples
///
/// ```
/// use smartdev::DeviceConfig;
///
/// // Partial configuration
/// let config = DeviceConfig::new()
///     .with_name("Bedroom Camera")
///     .with_type("Security Camera")
///     .with_location("Bedroom");
/// assert!(!config.is_fully_specified());
///
/// // Every field at once
/// let config = DeviceConfig::full("Front Door Lock", "Security Lock", true, 85, 22.5, "Front Door");
/// assert!(config.is_fully_specified());
///
/// // From JSON
/// let config = DeviceConfig::from_json(r#"{ "name": "Kitchen Light", "battery_level": 40 }"#)?;
/// assert_eq!(config.name.as_deref(), Some("Kitchen Light"));
/// # Ok::<(), smartdev::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Device name.
    pub name: Option<String>,
    /// Device category label.
    pub device_type: Option<String>,
    /// Free-text location.
    pub location: Option<String>,
    /// Initial power state.
    pub powered_on: Option<bool>,
    /// Initial battery level, clamped to 0-100.
    pub battery_level: Option<i32>,
    /// Initial temperature in Celsius.
    pub temperature: Option<f32>,
}

impl DeviceConfig {
    /// Creates a configuration with every field omitted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every field supplied.
    #[must_use]
    pub fn full(
        name: impl Into<String>,
        device_type: impl Into<String>,
        powered_on: bool,
        battery_level: i32,
        temperature: f32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            device_type: Some(device_type.into()),
            location: Some(location.into()),
            powered_on: Some(powered_on),
            battery_level: Some(battery_level),
            temperature: Some(temperature),
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not a valid
    /// configuration object.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Sets the device name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the device type.
    #[must_use]
    pub fn with_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the initial power state.
    #[must_use]
    pub fn with_powered(mut self, powered_on: bool) -> Self {
        self.powered_on = Some(powered_on);
        self
    }

    /// Sets the initial battery level.
    #[must_use]
    pub fn with_battery(mut self, level: i32) -> Self {
        self.battery_level = Some(level);
        self
    }

    /// Sets the initial temperature.
    #[must_use]
    pub fn with_temperature(mut self, celsius: f32) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Returns `true` if all six fields are supplied.
    #[must_use]
    pub fn is_fully_specified(&self) -> bool {
        self.name.is_some()
            && self.device_type.is_some()
            && self.location.is_some()
            && self.powered_on.is_some()
            && self.battery_level.is_some()
            && self.temperature.is_some()
    }

    /// Returns one change per supplied field, in the order
    /// name, type, location, power, battery, temperature.
    #[must_use]
    pub fn changes(&self) -> Vec<StateChange> {
        let mut changes = Vec::with_capacity(6);
        if let Some(name) = &self.name {
            changes.push(StateChange::Name(name.clone()));
        }
        if let Some(ty) = &self.device_type {
            changes.push(StateChange::DeviceType(ty.clone()));
        }
        if let Some(loc) = &self.location {
            changes.push(StateChange::Location(loc.clone()));
        }
        if let Some(on) = self.powered_on {
            changes.push(StateChange::Power(PowerState::from(on)));
        }
        if let Some(level) = self.battery_level {
            changes.push(StateChange::Battery(BatteryLevel::clamped(level)));
        }
        if let Some(celsius) = self.temperature {
            changes.push(StateChange::Temperature(Temperature::new(celsius)));
        }
        changes
    }
}
