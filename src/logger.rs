use crate::eventbus::{EventListener, TranslatedEvent};

/// Listener that prints every decoded event to stdout.
///
/// One line per event: the raw code and value plus the derived trigger,
/// phase, and action key.
pub struct StdoutLogger;

impl StdoutLogger {
    pub fn new() -> Self {
        StdoutLogger
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListener for StdoutLogger {
    fn on_event(&mut self, event: &TranslatedEvent) {
        println!(
            "event: code={} value={} trigger={} phase={} action={}{}",
            event.code,
            event.value,
            event.key.trigger.name(),
            event.key.phase.name(),
            event.key,
            if event.bound { "" } else { " (unbound)" },
        );
    }
}
