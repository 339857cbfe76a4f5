// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device state.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off power state
//! - [`BatteryLevel`] - Battery charge, always clamped to 0-100%
//! - [`Temperature`] - Temperature in Celsius, unclamped

mod battery;
mod power;
mod temperature;

pub use battery::BatteryLevel;
pub use power::PowerState;
pub use temperature::Temperature;
