//! Store Change Notifications
//!
//! Explicit publish/subscribe channel between the todo store and whatever
//! renders it.

use crate::domain::{Todo, TodoId};

/// A change that already happened to the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A todo was created
    Added(Todo),
    /// A todo's fields changed
    Changed(Todo),
    /// A todo was removed
    Destroyed(TodoId),
    /// The whole collection was replaced (after fetch)
    Reset(Vec<Todo>),
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn Fn(&StoreEvent)>;

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false when `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        self.handlers.len() != before
    }

    /// Deliver `event` to every handler, in subscription order
    pub fn publish(&self, event: &StoreEvent) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_reaches_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = seen.clone();
        bus.subscribe(move |_| first.borrow_mut().push("first"));
        let second = seen.clone();
        bus.subscribe(move |_| second.borrow_mut().push("second"));

        bus.publish(&StoreEvent::Reset(Vec::new()));
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();

        let counter = count.clone();
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);
        bus.publish(&StoreEvent::Reset(Vec::new()));

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&StoreEvent::Reset(Vec::new()));

        assert_eq!(*count.borrow(), 1);
        assert!(bus.is_empty());
    }
}
