// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! The [`DeviceState`] struct holds the configuration and runtime values of a
//! device, while [`StateChange`] represents an individual change that can be
//! applied to it.
//!
//! # Examples
//!
//! ```
//! use smartdev::state::{DeviceState, StateChange};
//! use smartdev::types::BatteryLevel;
//!
//! let mut state = DeviceState::new();
//! state.apply(&StateChange::Battery(BatteryLevel::clamped(150)));
//!
//! assert_eq!(state.battery(), BatteryLevel::FULL);
//! ```

mod device_state;
mod state_change;

pub use device_state::{DEFAULT_LOCATION, DEFAULT_NAME, DEFAULT_TYPE, DeviceState};
pub use state_change::StateChange;
