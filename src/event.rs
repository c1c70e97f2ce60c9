//! Raw events and the trigger/phase decode tables.
//!
//! The pedal reports plain kernel key events. Each [`RawEvent`] carries the
//! event class, the 16-bit code, and the 32-bit value. Only `Key` events
//! mean anything to the translator; every other class is discarded before
//! decoding.
//!
//! ## Code and value conventions
//! - The three switches enumerate as BTN_0..BTN_2, i.e. codes 256..258.
//! - Values are `1` for press and `0` for release. Autorepeat (`2`) is not
//!   produced by the pedal firmware and decodes to nothing.
//!
//! Codes or values outside the tables are ignored, not errors: the same
//! event node carries sync reports and scan-code noise alongside the
//! switch edges.

use serde::{Deserialize, Serialize};

/// Kernel event class of a raw input record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventClass {
    /// EV_KEY, the only class the translator decodes.
    Key,
    /// EV_SYN report separators.
    Sync,
    /// EV_REL motion.
    Relative,
    /// Anything else, kept as the raw type id.
    Other(u16),
}

/// One raw input record, as read from the device.
#[derive(Clone, Copy, Debug)]
pub struct RawEvent {
    pub class: EventClass,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    /// A key-class record (the common case).
    pub fn key(code: u16, value: i32) -> Self {
        Self {
            class: EventClass::Key,
            code,
            value,
        }
    }
}

/// Event codes reported by the pedal switches (BTN_0..BTN_2).
pub const CODE_LEFT: u16 = 256;
pub const CODE_MIDDLE: u16 = 257;
pub const CODE_RIGHT: u16 = 258;

/// Physical pedal switch, decoded from the event code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Left,
    Middle,
    Right,
}

impl Trigger {
    /// Code table: 256 → Left, 257 → Middle, 258 → Right.
    pub fn from_code(code: u16) -> Option<Trigger> {
        match code {
            CODE_LEFT => Some(Trigger::Left),
            CODE_MIDDLE => Some(Trigger::Middle),
            CODE_RIGHT => Some(Trigger::Right),
            _ => None,
        }
    }

    /// Upper-case spelling used in action keys and logs.
    pub fn name(self) -> &'static str {
        match self {
            Trigger::Left => "LEFT",
            Trigger::Middle => "MIDDLE",
            Trigger::Right => "RIGHT",
        }
    }
}

/// Edge of a switch event, decoded from the event value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Press,
    Release,
}

impl Phase {
    /// Value table: 1 → Press, 0 → Release.
    pub fn from_value(value: i32) -> Option<Phase> {
        match value {
            1 => Some(Phase::Press),
            0 => Some(Phase::Release),
            _ => None,
        }
    }

    /// Upper-case spelling used in action keys and logs.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Press => "PRESS",
            Phase::Release => "RELEASE",
        }
    }
}
