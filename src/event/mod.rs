// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events recorded by a device.
//!
//! A [`DeviceEvent`] is the typed form of one audit log entry. The device
//! builds the event, renders it with `Display` and hands the message to its
//! [`AuditLog`](crate::audit::AuditLog).

mod device_event;

pub use device_event::{DeviceEvent, Rejection};
