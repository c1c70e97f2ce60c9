//! Listener bus for decoded pedal events.
//!
//! Only events that pass both decode tables reach the bus; raw device
//! noise never fans out to listeners. The session publishes here when its
//! debug flag is set, so the bus is a debug tap rather than a data path.

use crate::action::ActionKey;
use crate::event::Phase;
use std::collections::HashMap;

/// Decoded view of one pedal event, as delivered to listeners.
#[derive(Clone, Copy, Debug)]
pub struct TranslatedEvent {
    /// Raw event code as read from the device.
    pub code: u16,
    /// Raw event value as read from the device.
    pub value: i32,
    /// Decoded trigger/phase pair.
    pub key: ActionKey,
    /// Whether the action table had a binding for the key.
    pub bound: bool,
}

/// Trait for reacting to decoded pedal events.
pub trait EventListener {
    fn on_event(&mut self, event: &TranslatedEvent);
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    PressesOnly,
    ReleasesOnly,
    Custom(fn(&TranslatedEvent) -> bool),
}

/// Listener with its filter and control flag.
struct ListenerEntry {
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
}

pub struct EventBus {
    next_id: u64,
    listeners: HashMap<u64, ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: HashMap::new(),
        }
    }

    /// Registers a listener with a filter; returns its id.
    pub fn add_listener(&mut self, listener: impl EventListener + 'static, filter: EventFilter) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Delivers one event to all active and matching listeners.
    pub fn publish(&mut self, event: &TranslatedEvent) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }

            let passes_filter = match entry.filter {
                EventFilter::All => true,
                EventFilter::PressesOnly => event.key.phase == Phase::Press,
                EventFilter::ReleasesOnly => event.key.phase == Phase::Release,
                EventFilter::Custom(f) => f(event),
            };

            if passes_filter {
                entry.listener.on_event(event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Phase, Trigger};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Counter(Rc<RefCell<usize>>);

    impl EventListener for Counter {
        fn on_event(&mut self, _event: &TranslatedEvent) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn press() -> TranslatedEvent {
        TranslatedEvent {
            code: 256,
            value: 1,
            key: ActionKey::new(Trigger::Left, Phase::Press),
            bound: true,
        }
    }

    #[test]
    fn disabled_then_reenabled_listener_resumes_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        let id = bus.add_listener(Counter(count.clone()), EventFilter::All);

        bus.publish(&press());
        bus.disable(id);
        bus.publish(&press());
        bus.enable(id);
        bus.publish(&press());

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn removed_listener_receives_nothing() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        let id = bus.add_listener(Counter(count.clone()), EventFilter::All);

        bus.remove_listener(id);
        bus.publish(&press());

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn custom_filters_see_only_what_they_ask_for() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        bus.add_listener(
            Counter(count.clone()),
            EventFilter::Custom(|event| event.code == 258),
        );

        bus.publish(&press());
        bus.publish(&TranslatedEvent {
            code: 258,
            value: 1,
            key: ActionKey::new(Trigger::Right, Phase::Press),
            bound: true,
        });

        assert_eq!(*count.borrow(), 1);
    }
}
