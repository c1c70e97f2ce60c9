//! Device metadata snapshot.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of an input node
//! suitable for diagnostics and logging. Backends populate what they know;
//! unknown fields remain `None`.
//!
//! # Conventions
//! - `bus` is a short, human-readable bus hint like `"usb"` or
//!   `"bluetooth"`.
//! - `name` is the kernel-reported device name when available.
//! - `path` is the `/dev/input/event*` node; it may change across replugs
//!   and reboots, so treat it as diagnostic first, identity second. The
//!   vendor / product / version triple is what re-identifies a device.

use serde::{Deserialize, Serialize};

/// Snapshot of metadata describing a single input node.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceMeta {
    /// High-level bus classification.
    pub bus: Option<String>,

    /// Vendor id from the kernel input id.
    pub vendor: u16,

    /// Product id from the kernel input id.
    pub product: u16,

    /// Version from the kernel input id.
    pub version: u16,

    /// Kernel-reported device name.
    pub name: Option<String>,

    /// Physical topology string, if the driver reports one.
    pub phys: Option<String>,

    /// Device node path.
    pub path: Option<String>,
}
