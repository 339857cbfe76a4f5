// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single timestamped audit log entry.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Timestamp format of audit entries, second granularity.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of a device's audit log.
///
/// Rendered as `[<YYYY-MM-DD HH:MM:SS>] <device-name>: <message>`.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use smartdev::audit::AuditEntry;
///
/// let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
/// let entry = AuditEntry::at(at, "Main Hub", "Diagnostics completed");
/// assert_eq!(
///     entry.to_string(),
///     "[2024-03-01 09:05:07] Main Hub: Diagnostics completed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    timestamp: DateTime<Local>,
    device: String,
    message: String,
}

impl AuditEntry {
    /// Creates an entry stamped with the current local time.
    #[must_use]
    pub fn now(device: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(Local::now(), device, message)
    }

    /// Creates an entry with an explicit timestamp.
    #[must_use]
    pub fn at(
        timestamp: DateTime<Local>,
        device: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            device: device.into(),
            message: message.into(),
        }
    }

    /// Returns the entry timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Returns the name of the device that produced the entry.
    #[must_use]
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Returns the entry message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.device,
            self.message
        )
    }
}
