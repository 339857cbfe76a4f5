// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `smartdev` library.
//!
//! Device operations themselves never fail: setters clamp or store their
//! input, and power-gated operations report a rejection through the audit
//! log instead of an error. The errors below cover the two IO boundaries,
//! the audit log sink and configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while opening or writing the audit log.
    #[error("log error: {0}")]
    Log(#[from] LogError),

    /// Error occurred while loading a device configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the audit log sink.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// A log line could not be written.
    #[error("failed to write log entry: {0}")]
    Write(#[from] io::Error),
}

/// Errors related to device configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
