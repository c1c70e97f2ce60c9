//! Device discovery by identity triple, with unbounded retry.
//!
//! Discovery never fails hard: a scan that turns up nothing (device
//! unplugged, or every node unreadable) reports `None`, and the caller
//! waits one retry delay before scanning again. The tool is meant to sit
//! in the background and pick the pedal up whenever it appears.

use crate::metadata::DeviceMeta;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed identity of the device to bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

impl DeviceIdentity {
    pub const fn new(vendor: u16, product: u16, version: u16) -> Self {
        Self {
            vendor,
            product,
            version,
        }
    }

    /// Exact match on all three fields.
    pub fn matches(&self, meta: &DeviceMeta) -> bool {
        meta.vendor == self.vendor && meta.product == self.product && meta.version == self.version
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04x}:{:04x}:{:04x}",
            self.vendor, self.product, self.version
        )
    }
}

/// One enumerated input node.
#[derive(Clone, Debug)]
pub struct DeviceEntry {
    pub path: PathBuf,
    pub meta: DeviceMeta,
}

/// Enumerates currently attached input nodes.
///
/// Scan order is whatever the platform reports; it is not guaranteed
/// stable between scans. Nodes the process cannot read simply do not
/// appear.
pub trait Enumerator {
    fn scan(&mut self) -> Vec<DeviceEntry>;
}

/// Injectable wait between discovery attempts.
pub trait Waiter {
    fn wait(&mut self, delay: Duration);
}

/// Waiter that actually sleeps the thread.
pub struct SleepWaiter;

impl Waiter for SleepWaiter {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Fixed delay between discovery attempts.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(5),
        }
    }
}

/// First entry whose identity matches, in scan order.
pub fn locate(entries: &[DeviceEntry], identity: &DeviceIdentity) -> Option<DeviceEntry> {
    entries
        .iter()
        .find(|entry| identity.matches(&entry.meta))
        .cloned()
}

/// Couples an enumerator with a retry policy and a wait seam.
pub struct Locator<E, W> {
    enumerator: E,
    policy: RetryPolicy,
    waiter: W,
}

impl<E: Enumerator, W: Waiter> Locator<E, W> {
    pub fn new(enumerator: E, policy: RetryPolicy, waiter: W) -> Self {
        Self {
            enumerator,
            policy,
            waiter,
        }
    }

    /// One scan. `None` when nothing attached matches.
    pub fn try_locate(&mut self, identity: &DeviceIdentity) -> Option<DeviceEntry> {
        locate(&self.enumerator.scan(), identity)
    }

    /// Scans until a matching device appears, waiting one retry delay
    /// between attempts. Unbounded: a replug minutes later still resolves.
    pub fn wait_for(&mut self, identity: &DeviceIdentity) -> DeviceEntry {
        loop {
            if let Some(entry) = self.try_locate(identity) {
                return entry;
            }
            println!(
                "No device {} found (or permission denied); retrying in {}s...",
                identity,
                self.policy.delay.as_secs()
            );
            self.waiter.wait(self.policy.delay);
        }
    }
}
