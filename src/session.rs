//! The translator/emitter loop.
//!
//! A session is one continuous run from a successfully opened device to
//! the moment its stream dies. The loop holds no state between events:
//! two presses with no release in between both fire, and nothing is
//! debounced.

use crate::action::{ActionKey, ActionMap};
use crate::device::{EventSource, PointerOutput};
use crate::error::{OutputError, StreamError};
use crate::event::RawEvent;
use crate::eventbus::{EventBus, TranslatedEvent};

/// Per-session settings, passed in instead of read from globals.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    /// Mirror decoded events onto the listener bus.
    pub debug: bool,
}

/// One discovery-to-disconnect run of the translation loop.
///
/// Owns the input side and the lookup tables; borrows the virtual mouse,
/// which outlives every session.
pub struct Session<'out> {
    source: Box<dyn EventSource>,
    output: &'out mut dyn PointerOutput,
    actions: ActionMap,
    bus: EventBus,
    config: SessionConfig,
}

impl<'out> Session<'out> {
    pub fn new(
        source: Box<dyn EventSource>,
        output: &'out mut dyn PointerOutput,
        actions: ActionMap,
        bus: EventBus,
        config: SessionConfig,
    ) -> Self {
        Self {
            source,
            output,
            actions,
            bus,
            config,
        }
    }

    /// Consumes the source until it ends.
    ///
    /// Per-event failures are printed and the loop moves on; only a dead
    /// stream ends the session. Returns `Ok` only for sources that can
    /// run dry (synthetic ones).
    pub fn run(&mut self) -> Result<(), StreamError> {
        loop {
            let batch = match self.source.next_events()? {
                Some(batch) => batch,
                None => return Ok(()),
            };
            for event in batch {
                if let Err(e) = self.handle(&event) {
                    println!("Error in loop: {e}");
                }
            }
        }
    }

    /// Decode, look up, invoke, publish — for one raw record.
    fn handle(&mut self, event: &RawEvent) -> Result<(), OutputError> {
        let Some(key) = ActionKey::decode(event) else {
            return Ok(());
        };

        let mut bound = false;
        let result = match self.actions.get(&key) {
            Some(action) => {
                bound = true;
                action.invoke(&mut *self.output)
            }
            None => Ok(()),
        };

        if self.config.debug {
            self.bus.publish(&TranslatedEvent {
                code: event.code,
                value: event.value,
                key,
                bound,
            });
        }

        result
    }
}
