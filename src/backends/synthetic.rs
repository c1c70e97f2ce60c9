//! Scriptable in-memory backends.
//!
//! [`SyntheticSource`] feeds a pre-scripted event sequence into a session
//! and [`RecordingOutput`] captures what the translator emitted. Together
//! they let the whole pipeline run in tests and demos without hardware.

use crate::action::MouseButton;
use crate::device::{EventSource, PointerOutput};
use crate::error::{OutputError, StreamError};
use crate::event::{Phase, RawEvent};
use std::collections::VecDeque;
use std::io;

/// Event source backed by a queue instead of a device node.
pub struct SyntheticSource {
    name: String,
    queue: VecDeque<RawEvent>,
    fail_when_drained: Option<String>,
}

impl SyntheticSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            queue: VecDeque::new(),
            fail_when_drained: None,
        }
    }

    /// Queue a raw record.
    pub fn feed(&mut self, event: RawEvent) {
        self.queue.push_back(event);
    }

    /// Queue a key record (the common case).
    pub fn feed_key(&mut self, code: u16, value: i32) {
        self.feed(RawEvent::key(code, value));
    }

    /// Once the queue drains, fail the next read instead of ending
    /// cleanly. Scripts a device disconnect.
    pub fn fail_when_drained(&mut self, message: &str) {
        self.fail_when_drained = Some(message.to_string());
    }
}

impl EventSource for SyntheticSource {
    fn next_events(&mut self) -> Result<Option<Vec<RawEvent>>, StreamError> {
        match self.queue.pop_front() {
            Some(event) => Ok(Some(vec![event])),
            None => match self.fail_when_drained.take() {
                Some(message) => Err(StreamError(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    message,
                ))),
                None => Ok(None),
            },
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// What the translator asked the pointer to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerCall {
    Button { button: MouseButton, phase: Phase },
    Motion { dx: i32, dy: i32 },
}

/// Pointer output that records calls instead of touching uinput.
#[derive(Default)]
pub struct RecordingOutput {
    calls: Vec<PointerCall>,
    fail_next: Option<String>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, in invocation order.
    pub fn calls(&self) -> &[PointerCall] {
        &self.calls
    }

    /// Make the next call fail with the given message.
    pub fn fail_next_call(&mut self, message: &str) {
        self.fail_next = Some(message.to_string());
    }

    fn record(&mut self, call: PointerCall) -> Result<(), OutputError> {
        if let Some(message) = self.fail_next.take() {
            return Err(OutputError::Rejected(message));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl PointerOutput for RecordingOutput {
    fn button(&mut self, button: MouseButton, phase: Phase) -> Result<(), OutputError> {
        self.record(PointerCall::Button { button, phase })
    }

    fn motion(&mut self, dx: i32, dy: i32) -> Result<(), OutputError> {
        self.record(PointerCall::Motion { dx, dy })
    }
}
