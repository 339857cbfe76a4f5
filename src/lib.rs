// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `smartdev` - a stateful smart device with a timestamped audit log.
//!
//! A [`Device`] is a named, typed entity with power, battery, temperature,
//! and location attributes. Its mutators enforce a few domain constraints
//! and record every change as a timestamped entry in an append-only log file
//! and on the console.
//!
//! # Features
//!
//! - **Validated state**: the battery level is always clamped to 0-100%
//! - **Power gate**: charging and temperature adjustment require power
//! - **Diagnostics**: a fixed seven-step self check with warnings for a low
//!   battery and out-of-range temperatures
//! - **Audit log**: `[YYYY-MM-DD HH:MM:SS] <device>: <message>` lines,
//!   written to `device_log.txt` and standard output
//!
//! # Quick Start
//!
//! ```no_run
//! use smartdev::{Device, DeviceConfig};
//!
//! let mut lock = Device::new(DeviceConfig::full(
//!     "Front Door Lock",
//!     "Security Lock",
//!     true,
//!     85,
//!     22.5,
//!     "Front Door",
//! ));
//!
//! assert!(lock.charge_battery(10));
//! assert_eq!(lock.battery_level(), 95);
//!
//! println!("{}", lock.status());
//! ```
//!
//! # Testing With an In-Memory Log
//!
//! ```
//! use smartdev::audit::{AuditLog, MemoryWriter};
//! use smartdev::{Device, DeviceConfig};
//!
//! let memory = MemoryWriter::new();
//! let mut device = Device::with_audit_log(
//!     DeviceConfig::new(),
//!     AuditLog::new().with_writer(memory.clone()),
//! );
//!
//! device.adjust_temperature(5.0);
//! assert_eq!(device.temperature(), 20.0);
//! assert_eq!(
//!     memory.messages().last().map(String::as_str),
//!     Some("Cannot adjust temperature - device is powered off")
//! );
//! ```

pub mod audit;
mod device;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod state;
pub mod types;

pub use audit::{AuditEntry, AuditLog, DEFAULT_LOG_PATH};
pub use device::{Device, DeviceConfig};
pub use diagnostics::DiagnosticReport;
pub use error::{ConfigError, Error, LogError, Result};
pub use types::{BatteryLevel, PowerState, Temperature};
