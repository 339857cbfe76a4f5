// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Audit log destinations.
//!
//! - [`FileWriter`] - append-only file, the persistent sink
//! - [`ConsoleWriter`] - standard output
//! - [`MemoryWriter`] - shared in-memory buffer, used in tests

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::LogError;

/// A destination for rendered audit log lines.
pub trait LogWriter: Send {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Writes one line. The writer appends the line terminator.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the line could not be written.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Returns `true` if lines outlive the process.
    fn is_persistent(&self) -> bool {
        false
    }
}

/// Append-only log file.
///
/// The file is opened in append mode, so entries from earlier devices and
/// earlier runs are kept. It is closed when the writer is dropped.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: File,
}

impl FileWriter {
    /// Opens `path` for appending, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "Opened audit log file");
        Ok(Self { path, file })
    }
}

impl LogWriter for FileWriter {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())?;
        self.file.flush()
    }

    fn is_persistent(&self) -> bool {
        true
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "Closing audit log file");
    }
}

/// Writes lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleWriter;

impl LogWriter for ConsoleWriter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory writer whose lines can be inspected through any clone.
///
/// # Examples
///
/// ```
/// use smartdev::audit::{LogWriter, MemoryWriter};
///
/// let writer = MemoryWriter::new();
/// let mut handle = writer.clone();
/// handle.write_line("hello").unwrap();
/// assert_eq!(writer.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns the number of lines written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Returns `true` if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Returns the message part of every line, without timestamp and name.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .map(|line| split_message(line).map_or_else(|| line.clone(), |(_, m)| m.to_string()))
            .collect()
    }

    /// Removes every line written so far.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

// Skips `[timestamp] name: ` and returns the message.
fn split_message(line: &str) -> Option<(&str, &str)> {
    let (_, rest) = line.split_once("] ")?;
    rest.split_once(": ")
}

impl LogWriter for MemoryWriter {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_writer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device_log.txt");

        {
            let mut writer = FileWriter::open(&path).unwrap();
            writer.write_line("first").unwrap();
        }
        {
            let mut writer = FileWriter::open(&path).unwrap();
            assert!(writer.is_persistent());
            writer.write_line("second").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn file_writer_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("device_log.txt");

        let err = FileWriter::open(&path).unwrap_err();
        assert!(matches!(err, LogError::Open { path: p, .. } if p == path));
    }

    #[test]
    fn memory_writer_shares_lines_between_clones() {
        let writer = MemoryWriter::new();
        let mut handle = writer.clone();
        handle.write_line("[2024-01-01 00:00:00] Hub: one").unwrap();
        handle.write_line("[2024-01-01 00:00:01] Hub: two: three").unwrap();

        assert_eq!(writer.len(), 2);
        assert_eq!(writer.messages(), vec!["one", "two: three"]);

        writer.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn console_writer_is_not_persistent() {
        assert!(!ConsoleWriter.is_persistent());
        assert_eq!(ConsoleWriter.name(), "console");
    }
}
