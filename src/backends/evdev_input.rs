//! Linux evdev input backend.
//!
//! Wraps one `/dev/input/event*` node as a blocking [`EventSource`] and
//! exposes enumeration of all readable nodes with their kernel identity.

use crate::device::EventSource;
use crate::error::StreamError;
use crate::event::{EventClass, RawEvent};
use crate::locator::{DeviceEntry, Enumerator};
use crate::metadata::DeviceMeta;
use evdev::{Device, EventType};
use std::io;
use std::path::Path;

fn class_of(event_type: EventType) -> EventClass {
    if event_type == EventType::KEY {
        EventClass::Key
    } else if event_type == EventType::SYNCHRONIZATION {
        EventClass::Sync
    } else if event_type == EventType::RELATIVE {
        EventClass::Relative
    } else {
        EventClass::Other(event_type.0)
    }
}

/// Blocking event source over one input node.
///
/// The node is opened read-only and not grabbed; the kernel keeps fanning
/// events out to other readers.
pub struct EvdevSource {
    device: Device,
    name: String,
}

impl EvdevSource {
    pub fn open(path: &Path) -> io::Result<Self> {
        let device = Device::open(path)?;
        let name = device.name().unwrap_or("unnamed device").to_string();
        Ok(Self { device, name })
    }
}

impl EventSource for EvdevSource {
    fn next_events(&mut self) -> Result<Option<Vec<RawEvent>>, StreamError> {
        let events = self.device.fetch_events().map_err(StreamError::from)?;
        let batch = events
            .map(|event| RawEvent {
                class: class_of(event.event_type()),
                code: event.code(),
                value: event.value(),
            })
            .collect();
        Ok(Some(batch))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Enumerates `/dev/input` nodes with their kernel identity.
///
/// Nodes the process cannot open are skipped by the underlying
/// enumeration, which is exactly the "absent or permission denied"
/// behavior discovery wants.
pub struct EvdevEnumerator;

impl Enumerator for EvdevEnumerator {
    fn scan(&mut self) -> Vec<DeviceEntry> {
        evdev::enumerate()
            .map(|(path, device)| {
                let id = device.input_id();
                DeviceEntry {
                    meta: DeviceMeta {
                        bus: Some(format!("{:?}", id.bus_type())),
                        vendor: id.vendor(),
                        product: id.product(),
                        version: id.version(),
                        name: device.name().map(|s| s.to_string()),
                        phys: device.physical_path().map(|s| s.to_string()),
                        path: Some(path.display().to_string()),
                    },
                    path,
                }
            })
            .collect()
    }
}
