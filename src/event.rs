//! Event bus - notifications fired by the core
//!
//! Geometry changes and refreshes are announced here. Nothing in the core
//! waits on a subscriber; triggering an event nobody is bound to is a no-op.

use std::collections::HashMap;
use std::fmt;

use crate::geometry::Direction;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A region was moved one step in a direction
    Move(Direction),
    Maximise,
    Unmaximise,
    /// A region was written to the terminal
    Refresh,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Move(direction) => write!(f, "_view_{}_", direction),
            EventKind::Maximise => write!(f, "_maximise_"),
            EventKind::Unmaximise => write!(f, "_unmaximise_"),
            EventKind::Refresh => write!(f, "_refresh_"),
        }
    }
}

/// A fired event and the region it concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub name: String,
}

impl Event {
    pub fn new(kind: EventKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

type Callback = Box<dyn FnMut(&Event)>;

/// Ordered subscriber lists per event kind
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Callback>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `kind`. Callbacks run in the order they were bound.
    pub fn bind(&mut self, kind: EventKind, callback: impl FnMut(&Event) + 'static) {
        self.handlers
            .entry(kind)
            .or_default()
            .push(Box::new(callback));
    }

    /// Drop every subscriber of `kind`. Returns whether any existed.
    pub fn unbind(&mut self, kind: EventKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.handlers.get(&kind).map_or(false, |h| !h.is_empty())
    }

    /// Run the subscribers of `event.kind` synchronously.
    ///
    /// Returns how many callbacks were invoked.
    pub fn trigger(&mut self, event: &Event) -> usize {
        match self.handlers.get_mut(&event.kind) {
            Some(callbacks) => {
                for callback in callbacks.iter_mut() {
                    callback(event);
                }
                callbacks.len()
            }
            None => 0,
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<String> = self.handlers.keys().map(ToString::to_string).collect();
        kinds.sort();
        f.debug_struct("EventBus").field("bound", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_trigger_without_subscribers() {
        let mut bus = EventBus::new();
        assert_eq!(bus.trigger(&Event::new(EventKind::Maximise, "main")), 0);
    }

    #[test]
    fn test_callbacks_run_in_bind_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            bus.bind(EventKind::Move(Direction::Left), move |event| {
                seen.borrow_mut().push(format!("{}:{}", tag, event.name));
            });
        }

        let count = bus.trigger(&Event::new(EventKind::Move(Direction::Left), "main"));
        assert_eq!(count, 2);
        assert_eq!(*seen.borrow(), vec!["first:main", "second:main"]);

        assert_eq!(bus.trigger(&Event::new(EventKind::Move(Direction::Right), "main")), 0);
    }

    #[test]
    fn test_unbind() {
        let mut bus = EventBus::new();
        bus.bind(EventKind::Refresh, |_| {});
        assert!(bus.is_bound(EventKind::Refresh));
        assert!(bus.unbind(EventKind::Refresh));
        assert!(!bus.unbind(EventKind::Refresh));
        assert_eq!(bus.trigger(&Event::new(EventKind::Refresh, "main")), 0);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(EventKind::Move(Direction::Up).to_string(), "_view_up_");
        assert_eq!(EventKind::Maximise.to_string(), "_maximise_");
        assert_eq!(EventKind::Unmaximise.to_string(), "_unmaximise_");
    }
}
