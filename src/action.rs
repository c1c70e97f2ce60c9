//! Action keys and the dispatch table.

use crate::device::PointerOutput;
use crate::error::OutputError;
use crate::event::{EventClass, Phase, RawEvent, Trigger};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Mouse button on the virtual output device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Trigger/phase pair identifying one bindable input edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionKey {
    pub trigger: Trigger,
    pub phase: Phase,
}

impl ActionKey {
    pub fn new(trigger: Trigger, phase: Phase) -> Self {
        Self { trigger, phase }
    }

    /// Decodes a raw record through the code and value tables.
    ///
    /// Non-key classes and unmapped codes or values return `None`.
    pub fn decode(event: &RawEvent) -> Option<ActionKey> {
        if event.class != EventClass::Key {
            return None;
        }
        let trigger = Trigger::from_code(event.code)?;
        let phase = Phase::from_value(event.value)?;
        Some(ActionKey { trigger, phase })
    }
}

impl fmt::Display for ActionKey {
    /// Renders the `"<TRIGGER>_<PHASE>"` spelling used in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.trigger.name(), self.phase.name())
    }
}

/// A bound side effect, invoked when its key decodes.
pub trait Action {
    fn invoke(&self, out: &mut dyn PointerOutput) -> Result<(), OutputError>;
}

/// Emits one button edge on the virtual mouse.
#[derive(Clone, Copy, Debug)]
pub struct ButtonAction {
    pub button: MouseButton,
    pub phase: Phase,
}

impl Action for ButtonAction {
    fn invoke(&self, out: &mut dyn PointerOutput) -> Result<(), OutputError> {
        out.button(self.button, self.phase)
    }
}

/// Dispatch table from action keys to bound actions.
///
/// Built once at startup and never mutated while a session runs. Keys with
/// no binding are no-ops, not errors.
pub struct ActionMap {
    bindings: HashMap<ActionKey, Box<dyn Action>>,
}

impl ActionMap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: ActionKey, action: impl Action + 'static) {
        self.bindings.insert(key, Box::new(action));
    }

    pub fn get(&self, key: &ActionKey) -> Option<&dyn Action> {
        self.bindings.get(key).map(|action| action.as_ref())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Default pedal layout.
    ///
    /// The left and middle switches are crossed on purpose: the physical
    /// left switch drives middle click and the middle switch drives left
    /// click. The right switch maps straight through. Do not "fix" the
    /// crossing; it matches how the pedal sits under the foot.
    pub fn pedal_defaults() -> Self {
        let mut map = Self::empty();
        for phase in [Phase::Press, Phase::Release] {
            map.bind(
                ActionKey::new(Trigger::Left, phase),
                ButtonAction {
                    button: MouseButton::Middle,
                    phase,
                },
            );
            map.bind(
                ActionKey::new(Trigger::Middle, phase),
                ButtonAction {
                    button: MouseButton::Left,
                    phase,
                },
            );
            map.bind(
                ActionKey::new(Trigger::Right, phase),
                ButtonAction {
                    button: MouseButton::Right,
                    phase,
                },
            );
        }
        map
    }
}
