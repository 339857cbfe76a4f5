// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use std::fmt;

use crate::diagnostics::DiagnosticCheck;
use crate::state::StateChange;

/// Operation refused because the device is powered off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `charge_battery` was called while powered off.
    Charge,
    /// `adjust_temperature` was called while powered off.
    AdjustTemperature,
}

/// Events recorded in a device's audit log.
///
/// Every audit log entry corresponds to exactly one event, and the
/// [`Display`](fmt::Display) implementation produces the entry message.
///
/// # Examples
///
/// ```
/// use smartdev::event::DeviceEvent;
/// use smartdev::state::StateChange;
/// use smartdev::types::PowerState;
///
/// let event = DeviceEvent::StateChanged(StateChange::Toggled(PowerState::On));
/// assert_eq!(event.to_string(), "Device toggled to: ON");
///
/// let event = DeviceEvent::Destroyed { name: "Kitchen Light".into() };
/// assert_eq!(event.to_string(), "Device Kitchen Light destroyed");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// Device was created from defaults (possibly followed by `Configured`).
    Created,

    /// Device was created with every field supplied.
    FullyInitialized,

    /// A field supplied at construction was applied.
    Configured(StateChange),

    /// Device state changed after construction.
    StateChanged(StateChange),

    /// A power-gated operation was refused.
    Rejected(Rejection),

    /// A diagnostic step ran.
    Diagnostic(DiagnosticCheck),

    /// Device is being torn down.
    Destroyed {
        /// Name of the device at teardown.
        name: String,
    },
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("Device created with default parameters"),
            Self::FullyInitialized => f.write_str("Device fully initialized with custom parameters"),
            Self::Configured(change) => f.write_str(&change.describe_initial()),
            Self::StateChanged(change) => f.write_str(&change.describe()),
            Self::Rejected(Rejection::Charge) => {
                f.write_str("Cannot charge - device is powered off")
            }
            Self::Rejected(Rejection::AdjustTemperature) => {
                f.write_str("Cannot adjust temperature - device is powered off")
            }
            Self::Diagnostic(check) => write!(f, "{check}"),
            Self::Destroyed { name } => write!(f, "Device {name} destroyed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_and_changed_render_differently() {
        let change = StateChange::Name("Hub".into());
        assert_eq!(
            DeviceEvent::Configured(change.clone()).to_string(),
            "Device name set to: Hub"
        );
        assert_eq!(
            DeviceEvent::StateChanged(change).to_string(),
            "Device name changed to: Hub"
        );
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            DeviceEvent::Rejected(Rejection::Charge).to_string(),
            "Cannot charge - device is powered off"
        );
        assert_eq!(
            DeviceEvent::Rejected(Rejection::AdjustTemperature).to_string(),
            "Cannot adjust temperature - device is powered off"
        );
    }
}
