use crate::action::MouseButton;
use crate::error::{OutputError, StreamError};
use crate::event::{Phase, RawEvent};

/// Blocking stream of raw input records from one device.
pub trait EventSource {
    /// Blocks until the next batch of records is available.
    ///
    /// `Ok(None)` means the source is exhausted; only synthetic sources do
    /// that. A real device blocks until events arrive or the node dies,
    /// in which case the error ends the session.
    fn next_events(&mut self) -> Result<Option<Vec<RawEvent>>, StreamError>;

    fn name(&self) -> &str;
}

/// Synthetic pointing device the translator emits through.
pub trait PointerOutput {
    /// Press or release one mouse button.
    fn button(&mut self, button: MouseButton, phase: Phase) -> Result<(), OutputError>;

    /// Relative pointer motion. The virtual device declares this
    /// capability but the translation loop never drives it.
    fn motion(&mut self, dx: i32, dy: i32) -> Result<(), OutputError>;
}
