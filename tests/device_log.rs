// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the file-backed audit log.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use smartdev::audit::{AuditLog, TIMESTAMP_FORMAT};
use smartdev::{Device, DeviceConfig};
use tempfile::TempDir;

fn log_path(dir: &TempDir) -> PathBuf {
    dir.path().join("device_log.txt")
}

fn open_device(config: DeviceConfig, path: &Path) -> Device {
    Device::with_audit_log(config, AuditLog::file_and_console(path))
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

/// Splits `[timestamp] name: message` into its parts.
fn parse_line(line: &str) -> (NaiveDateTime, &str, &str) {
    let rest = line.strip_prefix('[').expect("line starts with '['");
    let (timestamp, rest) = rest.split_once("] ").expect("timestamp is closed");
    let (name, message) = rest.split_once(": ").expect("name is followed by ': '");
    let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap();
    (timestamp, name, message)
}

// ============================================================================
// Line format and counts
// ============================================================================

mod format {
    use super::*;

    #[test]
    fn every_line_is_timestamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        {
            let mut device = open_device(DeviceConfig::new().with_name("Main Hub"), &path);
            device.set_location("Living Room");
            device.set_powered(true);
        }

        let lines = read_lines(&path);
        assert!(!lines.is_empty());
        for line in &lines {
            let (_, name, _) = parse_line(line);
            assert!(name == "Unknown" || name == "Main Hub", "unexpected name in {line}");
        }
        let (_, _, last) = parse_line(lines.last().unwrap());
        assert_eq!(last, "Device Main Hub destroyed");
    }

    #[test]
    fn entry_count_is_construction_plus_mutations_plus_teardown() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        {
            let mut device = open_device(DeviceConfig::new(), &path);
            device.set_name("Counter");
            device.set_battery(50);
            device.power_toggle();
            device.charge_battery(20);
            device.adjust_temperature(1.5);
            device.set_temperature(18.0);
        }

        // 1 creation entry + 6 mutations + 1 teardown
        assert_eq!(read_lines(&path).len(), 8);
    }

    #[test]
    fn fully_specified_device_logs_single_creation_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        {
            let device = open_device(DeviceConfig::full("X", "Y", true, 150, 22.5, "Z"), &path);
            assert_eq!(device.battery_level(), 100);
        }

        let messages: Vec<String> = read_lines(&path)
            .iter()
            .map(|l| parse_line(l).2.to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Device fully initialized with custom parameters",
                "Device X destroyed",
            ]
        );
    }

    #[test]
    fn diagnostics_write_seven_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        let mut device = open_device(DeviceConfig::new(), &path);
        let before = read_lines(&path).len();
        device.perform_diagnostics();
        let after = read_lines(&path).len();

        assert_eq!(after - before, 7);
    }
}

// ============================================================================
// Sink lifecycle
// ============================================================================

mod sink {
    use super::*;

    #[test]
    fn devices_append_to_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        drop(open_device(DeviceConfig::new().with_name("First"), &path));
        let first_run = read_lines(&path);

        drop(open_device(DeviceConfig::new().with_name("Second"), &path));
        let lines = read_lines(&path);

        assert_eq!(&lines[..first_run.len()], first_run.as_slice());
        assert_eq!(lines.len(), first_run.len() * 2);
        assert!(lines.last().unwrap().ends_with("Second: Device Second destroyed"));
    }

    #[test]
    fn entries_are_written_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(&dir);

        let mut device = open_device(DeviceConfig::new(), &path);
        device.set_name("Live");

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(parse_line(&lines[1]).2, "Device name changed to: Live");
    }

    #[test]
    fn unavailable_file_falls_back_to_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("device_log.txt");

        let mut device = open_device(DeviceConfig::new().with_powered(true), &path);
        assert!(device.charge_battery(0));
        device.adjust_temperature(-2.5);

        assert!((device.temperature() - 17.5).abs() < f32::EPSILON);
        assert!(!path.exists());
    }
}

// ============================================================================
// Scripted scenario
// ============================================================================

#[test]
fn hub_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);

    {
        let mut hub = open_device(DeviceConfig::new(), &path);
        hub.set_name("Main Hub");
        hub.set_type("Control Center");
        hub.set_location("Living Room");
        hub.set_powered(true);
        let report = hub.perform_diagnostics();
        assert!(report.is_healthy());

        assert_eq!(
            hub.status(),
            "Device: Main Hub (Control Center)\n\
             Location: Living Room\n\
             Power: ON\n\
             Battery: 100%\n\
             Temperature: 20.0°C"
        );
    }

    let lines = read_lines(&path);
    // 1 creation + 4 setters + 7 diagnostics + 1 teardown
    assert_eq!(lines.len(), 13);
    let (_, name, first) = parse_line(&lines[0]);
    assert_eq!((name, first), ("Unknown", "Device created with default parameters"));
    let (_, name, last) = parse_line(&lines[12]);
    assert_eq!((name, last), ("Main Hub", "Device Main Hub destroyed"));
}
