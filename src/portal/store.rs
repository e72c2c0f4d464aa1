//! Notification store
//!
//! Owns the authoritative notification list. The bell only reads from it
//! and asks it to change read state.

use crate::types::NotificationItem;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    items: Vec<NotificationItem>,
}

impl NotificationStore {
    /// Create a store from an already ordered list (newest first)
    pub fn new(items: Vec<NotificationItem>) -> Self {
        Self { items }
    }

    /// All notifications, in store order
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&NotificationItem> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns false for an unknown id.
    pub fn mark_as_read(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read = true;
                debug!(id, "notification marked read");
                true
            }
            None => {
                debug!(id, "mark_as_read for unknown notification");
                false
            }
        }
    }

    /// Mark every notification read, returning how many changed
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|n| !n.read) {
            item.read = true;
            changed += 1;
        }
        debug!(changed, "all notifications marked read");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventDetails;
    use chrono::NaiveDate;

    fn items(unread: &[u64], total: u64) -> Vec<NotificationItem> {
        (1..=total)
            .map(|id| NotificationItem {
                id,
                title: format!("Event {}", id),
                read: !unread.contains(&id),
                creator: None,
                event_details: EventDetails {
                    date: NaiveDate::from_ymd_opt(2026, 1, id as u32).unwrap(),
                    time: None,
                },
            })
            .collect()
    }

    #[test]
    fn test_unread_count() {
        let store = NotificationStore::new(items(&[1, 3, 7], 8));
        assert_eq!(store.unread_count(), 3);
        assert_eq!(store.items().len(), 8);
    }

    #[test]
    fn test_mark_as_read() {
        let mut store = NotificationStore::new(items(&[1, 3], 4));
        assert!(store.mark_as_read(1));
        assert!(store.get(1).unwrap().read);
        assert_eq!(store.unread_count(), 1);

        // Already read stays read
        assert!(store.mark_as_read(2));
        assert_eq!(store.unread_count(), 1);

        assert!(!store.mark_as_read(99));
    }

    #[test]
    fn test_mark_all_as_read() {
        let mut store = NotificationStore::new(items(&[2, 3, 4], 5));
        assert_eq!(store.mark_all_as_read(), 3);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.mark_all_as_read(), 0);
    }
}
