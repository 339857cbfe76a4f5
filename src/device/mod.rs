// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The smart device state machine.
//!
//! A [`Device`] owns its [`DeviceState`] and an [`AuditLog`]. Every mutator
//! records exactly one audit entry, written to the log file and then to the
//! console. Queries never log.
//!
//! # Power Gate
//!
//! [`Device::charge_battery`] and [`Device::adjust_temperature`] only act
//! while the device is powered on. When it is off they leave the state
//! untouched and log the reason; `charge_battery` additionally returns
//! `false`, while `adjust_temperature` gives no feedback besides the log.
//!
//! # Lifecycle
//!
//! The audit log is opened on construction and closed when the device is
//! dropped, right after a final `Device <name> destroyed` entry.
//!
//! ```no_run
//! use smartdev::{Device, DeviceConfig};
//!
//! let mut hub = Device::new(DeviceConfig::new());
//! hub.set_name("Main Hub");
//! hub.set_powered(true);
//!
//! let report = hub.perform_diagnostics();
//! assert!(report.is_healthy());
//! ```

mod config;

pub use config::DeviceConfig;

use crate::audit::{AuditLog, DEFAULT_LOG_PATH};
use crate::diagnostics::{self, DiagnosticReport};
use crate::event::{DeviceEvent, Rejection};
use crate::state::{DeviceState, StateChange};
use crate::types::{BatteryLevel, PowerState, Temperature};

/// A single smart device with an append-only audit log.
///
/// # Examples
///
/// ```
/// use smartdev::audit::{AuditLog, MemoryWriter};
/// use smartdev::{Device, DeviceConfig};
///
/// let memory = MemoryWriter::new();
/// let config = DeviceConfig::new().with_name("Kitchen Light");
/// let mut light = Device::with_audit_log(config, AuditLog::new().with_writer(memory.clone()));
///
/// assert!(!light.charge_battery(10));
/// light.power_toggle();
/// assert!(light.charge_battery(10));
///
/// assert_eq!(
///     memory.messages(),
///     vec![
///         "Device created with default parameters",
///         "Device name set to: Kitchen Light",
///         "Cannot charge - device is powered off",
///         "Device toggled to: ON",
///         "Battery charged by 0%. New level: 100%",
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Device {
    state: DeviceState,
    log: AuditLog,
}

impl Device {
    /// Creates a device logging to `device_log.txt` and standard output.
    ///
    /// Failing to open the log file is not fatal: a notice is written to
    /// standard error and the device logs to the console only.
    #[must_use]
    pub fn new(config: DeviceConfig) -> Self {
        Self::with_audit_log(config, AuditLog::file_and_console(DEFAULT_LOG_PATH))
    }

    /// Creates a device recording to the given audit log.
    ///
    /// A fully specified configuration is applied at once and logged as a
    /// single entry. Otherwise the device starts from defaults, logs its
    /// creation, then logs one entry per supplied field.
    #[must_use]
    pub fn with_audit_log(config: DeviceConfig, log: AuditLog) -> Self {
        let mut device = Self {
            state: DeviceState::new(),
            log,
        };

        if config.is_fully_specified() {
            for change in config.changes() {
                device.state.apply(&change);
            }
            device.emit(&DeviceEvent::FullyInitialized);
        } else {
            device.emit(&DeviceEvent::Created);
            for change in config.changes() {
                device.state.apply(&change);
                device.emit(&DeviceEvent::Configured(change));
            }
        }

        device
    }

    // ========== Mutators ==========

    /// Renames the device.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.change(StateChange::Name(name.into()));
    }

    /// Changes the device type.
    pub fn set_type(&mut self, device_type: impl Into<String>) {
        self.change(StateChange::DeviceType(device_type.into()));
    }

    /// Changes the location.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.change(StateChange::Location(location.into()));
    }

    /// Sets the power state.
    pub fn set_powered(&mut self, on: bool) {
        self.change(StateChange::Power(PowerState::from(on)));
    }

    /// Sets the battery level, clamped to 0-100.
    pub fn set_battery(&mut self, level: i32) {
        self.change(StateChange::Battery(BatteryLevel::clamped(level)));
    }

    /// Sets the temperature. The value is not clamped.
    pub fn set_temperature(&mut self, celsius: f32) {
        self.change(StateChange::Temperature(Temperature::new(celsius)));
    }

    /// Flips the power state.
    pub fn power_toggle(&mut self) {
        let toggled = self.state.power().toggled();
        self.change(StateChange::Toggled(toggled));
    }

    /// Charges the battery by `amount` percentage points.
    ///
    /// Returns `false` without changing anything if the device is off.
    /// Otherwise the level saturates at 100 and the entry records the delta
    /// actually applied.
    pub fn charge_battery(&mut self, amount: i32) -> bool {
        if !self.is_powered_on() {
            self.emit(&DeviceEvent::Rejected(Rejection::Charge));
            return false;
        }

        let before = self.state.battery();
        let after = before.saturating_add(amount);
        self.change(StateChange::charged(before, after));
        true
    }

    /// Adjusts the temperature by `delta` degrees.
    ///
    /// Does nothing besides logging the reason if the device is off.
    pub fn adjust_temperature(&mut self, delta: f32) {
        if !self.is_powered_on() {
            self.emit(&DeviceEvent::Rejected(Rejection::AdjustTemperature));
            return;
        }

        let from = self.state.temperature();
        self.change(StateChange::TemperatureAdjusted {
            from,
            to: from + delta,
        });
    }

    /// Runs the self-diagnostics and logs each of its seven steps.
    ///
    /// The state is not modified.
    pub fn perform_diagnostics(&mut self) -> DiagnosticReport {
        let (report, checks) = diagnostics::run(&self.state);
        for check in checks {
            if check.is_warning() {
                tracing::debug!(device = %self.state.name(), %check, "Diagnostic warning");
            }
            self.emit(&DeviceEvent::Diagnostic(check));
        }
        if !report.is_healthy() {
            tracing::debug!(
                device = %self.state.name(),
                low_battery = report.low_battery,
                temperature_out_of_range = report.temperature_out_of_range,
                "Diagnostics raised warnings"
            );
        }
        report
    }

    // ========== Queries ==========

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Returns the device type.
    #[must_use]
    pub fn device_type(&self) -> &str {
        self.state.device_type()
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        self.state.location()
    }

    /// Returns `true` if the device is powered on.
    #[must_use]
    pub fn is_powered_on(&self) -> bool {
        self.state.power().is_on()
    }

    /// Returns the power state.
    #[must_use]
    pub fn power_state(&self) -> PowerState {
        self.state.power()
    }

    /// Returns the battery level in percent.
    #[must_use]
    pub fn battery_level(&self) -> u8 {
        self.state.battery().value()
    }

    /// Returns the temperature in Celsius.
    #[must_use]
    pub fn temperature(&self) -> f32 {
        self.state.temperature().celsius()
    }

    /// Returns `true` if the battery level is below 20%.
    #[must_use]
    pub fn is_low_battery(&self) -> bool {
        self.state.battery().is_low()
    }

    /// Returns the multi-line status report.
    #[must_use]
    pub fn status(&self) -> String {
        self.state.to_string()
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> &DeviceState {
        &self.state
    }

    /// Prints the status report to standard output.
    pub fn display_info(&self) {
        println!("{}", self.status());
    }

    // ========== Internals ==========

    fn change(&mut self, change: StateChange) {
        let changed = self.state.apply(&change);
        tracing::debug!(device = %self.state.name(), ?change, changed, "Applied state change");
        self.emit(&DeviceEvent::StateChanged(change));
    }

    fn emit(&mut self, event: &DeviceEvent) {
        self.log.record(self.state.name(), event.to_string());
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        let name = self.state.name().to_string();
        self.emit(&DeviceEvent::Destroyed { name });
    }
}
