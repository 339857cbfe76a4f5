// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Self-diagnostics.
//!
//! A diagnostic run inspects a [`DeviceState`] without changing it and yields
//! the fixed sequence of seven [`DiagnosticCheck`] steps that the device
//! writes to its audit log, plus a [`DiagnosticReport`] summarizing the
//! warnings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::DeviceState;
use crate::types::{BatteryLevel, PowerState, Temperature};

/// A single step of a diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticCheck {
    /// Diagnostics started.
    Started,
    /// Power state inspected.
    Power(PowerState),
    /// Battery level inspected.
    Battery(BatteryLevel),
    /// Battery level is acceptable.
    BatteryOk,
    /// Battery level is below the low threshold.
    LowBattery,
    /// Temperature inspected.
    Temperature(Temperature),
    /// Temperature is within the operating range.
    TemperatureOk,
    /// Temperature is outside the operating range.
    TemperatureOutOfRange,
    /// Diagnostics finished.
    Completed,
}

impl DiagnosticCheck {
    /// Returns `true` for the two warning steps.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::LowBattery | Self::TemperatureOutOfRange)
    }
}

impl fmt::Display for DiagnosticCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => f.write_str("Starting diagnostics..."),
            Self::Power(state) => {
                let status = if state.is_on() { "OK" } else { "OFF" };
                write!(f, "Checking power: {status}")
            }
            Self::Battery(level) => write!(f, "Checking battery level: {level}"),
            Self::BatteryOk => f.write_str("Battery level OK"),
            Self::LowBattery => f.write_str("WARNING: Low battery detected!"),
            Self::Temperature(temp) => write!(f, "Checking temperature: {temp}"),
            Self::TemperatureOk => f.write_str("Temperature OK"),
            Self::TemperatureOutOfRange => {
                f.write_str("WARNING: Temperature outside normal operating range!")
            }
            Self::Completed => f.write_str("Diagnostics completed"),
        }
    }
}

/// Outcome of a diagnostic run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Battery level was below the low threshold.
    pub low_battery: bool,
    /// Temperature was below 0°C or above 40°C.
    pub temperature_out_of_range: bool,
}

impl DiagnosticReport {
    /// Returns `true` if no warning was raised.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        !self.low_battery && !self.temperature_out_of_range
    }
}

/// Runs the diagnostic checks against `state`.
#[must_use]
pub fn run(state: &DeviceState) -> (DiagnosticReport, Vec<DiagnosticCheck>) {
    let report = DiagnosticReport {
        low_battery: state.battery().is_low(),
        temperature_out_of_range: state.temperature().is_out_of_operating_range(),
    };

    let checks = vec![
        DiagnosticCheck::Started,
        DiagnosticCheck::Power(state.power()),
        DiagnosticCheck::Battery(state.battery()),
        if report.low_battery {
            DiagnosticCheck::LowBattery
        } else {
            DiagnosticCheck::BatteryOk
        },
        DiagnosticCheck::Temperature(state.temperature()),
        if report.temperature_out_of_range {
            DiagnosticCheck::TemperatureOutOfRange
        } else {
            DiagnosticCheck::TemperatureOk
        },
        DiagnosticCheck::Completed,
    ];

    (report, checks)
}
