//! Process-wide pointer dispatcher
//!
//! Widgets that need to know about pointer-downs outside themselves (a
//! dropdown closing on outside click) subscribe with their bounding region.
//! The returned [`Subscription`] deregisters itself when dropped, so a
//! widget that goes away can never receive a stale event.

use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::trace;

pub type ListenerId = u64;

#[derive(Debug, Default)]
struct Registry {
    next_id: ListenerId,
    regions: BTreeMap<ListenerId, Vec<Rect>>,
}

/// Shared handle to the pointer registry. Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct PointerDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It starts with an empty region, so every
    /// pointer-down counts as outside until [`Subscription::set_region`].
    pub fn subscribe(&self) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.regions.insert(id, Vec::new());
        trace!(id, "pointer listener registered");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Ids of every listener whose region does not contain `position`
    pub fn dispatch(&self, position: Position) -> Vec<ListenerId> {
        self.registry
            .borrow()
            .regions
            .iter()
            .filter(|(_, rects)| !rects.iter().any(|r| r.contains(position)))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().regions.len()
    }
}

/// Scoped registration with a [`PointerDispatcher`]
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Replace the listener's bounding region
    pub fn set_region(&self, rects: &[Rect]) {
        if let Some(registry) = self.registry.upgrade() {
            if let Some(region) = registry.borrow_mut().regions.get_mut(&self.id) {
                region.clear();
                region.extend(rects.iter().copied().filter(|r| r.area() > 0));
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().regions.remove(&self.id);
            trace!(id = self.id, "pointer listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_outside_only() {
        let dispatcher = PointerDispatcher::new();
        let sub = dispatcher.subscribe();
        sub.set_region(&[Rect::new(10, 0, 5, 1), Rect::new(0, 1, 20, 10)]);

        assert!(dispatcher.dispatch(Position::new(12, 0)).is_empty());
        assert!(dispatcher.dispatch(Position::new(3, 5)).is_empty());
        assert_eq!(dispatcher.dispatch(Position::new(3, 0)), vec![sub.id()]);
        assert_eq!(dispatcher.dispatch(Position::new(30, 30)), vec![sub.id()]);
    }

    #[test]
    fn test_drop_releases_listener() {
        let dispatcher = PointerDispatcher::new();
        let first = dispatcher.subscribe();
        let second = dispatcher.subscribe();
        assert_ne!(first.id(), second.id());
        assert_eq!(dispatcher.listener_count(), 2);

        let gone = first.id();
        drop(first);
        assert_eq!(dispatcher.listener_count(), 1);
        assert!(!dispatcher.dispatch(Position::new(0, 0)).contains(&gone));
    }

    #[test]
    fn test_subscription_outliving_dispatcher() {
        let dispatcher = PointerDispatcher::new();
        let sub = dispatcher.subscribe();
        drop(dispatcher);
        sub.set_region(&[Rect::new(0, 0, 1, 1)]);
        drop(sub);
    }
}
