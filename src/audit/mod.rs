// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamped audit logging.
//!
//! An [`AuditLog`] fans every entry out to its registered [`LogWriter`]s in
//! registration order. A device normally owns a log with a [`FileWriter`]
//! followed by a [`ConsoleWriter`], so each entry reaches the file before it
//! reaches the console.
//!
//! # Examples
//!
//! ```
//! use smartdev::audit::{AuditLog, MemoryWriter};
//!
//! let memory = MemoryWriter::new();
//! let mut log = AuditLog::new().with_writer(memory.clone());
//!
//! log.record("Kitchen Light", "Device toggled to: ON");
//! assert_eq!(memory.messages(), vec!["Device toggled to: ON"]);
//! ```

mod entry;
mod writer;

use std::fmt;
use std::path::Path;

pub use entry::{AuditEntry, TIMESTAMP_FORMAT};
pub use writer::{ConsoleWriter, FileWriter, LogWriter, MemoryWriter};

use crate::error::LogError;

/// Default audit log file name.
pub const DEFAULT_LOG_PATH: &str = "device_log.txt";

/// Ordered set of writers receiving audit entries.
#[derive(Default)]
pub struct AuditLog {
    writers: Vec<Box<dyn LogWriter>>,
}

impl AuditLog {
    /// Creates a log with no writers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log writing to the file at `path`, then to standard output.
    ///
    /// If the file cannot be opened, a one-line notice naming it is written
    /// to standard error and the log continues with the console only.
    #[must_use]
    pub fn file_and_console(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let log = match Self::new().with_file(path) {
            Ok(log) => log,
            Err(err) => {
                tracing::warn!(error = %err, "Audit log file unavailable, logging to console only");
                eprintln!("{}", open_failure_notice(path));
                Self::new()
            }
        };
        log.with_writer(ConsoleWriter)
    }

    /// Adds a writer after the existing ones.
    #[must_use]
    pub fn with_writer(mut self, writer: impl LogWriter + 'static) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    /// Adds an append-only file writer after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened.
    pub fn with_file(self, path: impl AsRef<Path>) -> Result<Self, LogError> {
        let writer = FileWriter::open(path)?;
        Ok(self.with_writer(writer))
    }

    /// Returns the number of registered writers.
    #[must_use]
    pub fn writer_count(&self) -> usize {
        self.writers.len()
    }

    /// Returns `true` if at least one writer persists its lines.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.writers.iter().any(|w| w.is_persistent())
    }

    /// Records `message` for `device`, stamped with the current local time.
    pub fn record(&mut self, device: &str, message: impl Into<String>) -> AuditEntry {
        let entry = AuditEntry::now(device, message);
        self.write(&entry);
        entry
    }

    /// Writes an already built entry to every writer.
    ///
    /// A failing writer is reported through `tracing` and does not prevent
    /// the remaining writers from receiving the line.
    pub fn write(&mut self, entry: &AuditEntry) {
        let line = entry.to_string();
        for writer in &mut self.writers {
            if let Err(err) = writer.write_line(&line) {
                let err = LogError::from(err);
                tracing::warn!(writer = writer.name(), error = %err, "Failed to write audit entry");
            }
        }
    }
}

/// Line written to standard error when the log file cannot be opened.
fn open_failure_notice(path: &Path) -> String {
    format!("Failed to open log file: {}", path.display())
}

impl fmt::Debug for AuditLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.writers.iter().map(|w| w.name()).collect();
        f.debug_struct("AuditLog").field("writers", &names).finish()
    }
}
