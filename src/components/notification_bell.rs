//! Notification bell with dropdown
//!
//! The bell owns only its open/closed flag and a keyboard cursor. The
//! notification list, unread count and read transitions belong to the
//! store and are passed in by the caller.

use crate::components::avatar::AvatarResolver;
use crate::components::pointer::{ListenerId, PointerDispatcher, Subscription};
use crate::types::NotificationItem;
use ratatui::layout::Rect;
use std::path::PathBuf;
use tracing::debug;

/// Entries shown in the dropdown
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 5;

/// First entries of `items`, in supplied order
pub fn visible_notifications(items: &[NotificationItem]) -> &[NotificationItem] {
    &items[..items.len().min(MAX_VISIBLE_NOTIFICATIONS)]
}

/// Badge text for an unread count; `None` hides the badge
pub fn badge_label(unread: usize) -> Option<String> {
    (unread > 0).then(|| unread.to_string())
}

/// Render-ready notification entry with every fallback applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: u64,
    pub title: String,
    pub unread: bool,
    pub creator_name: String,
    pub creator_role: String,
    pub avatar: PathBuf,
    pub when: String,
}

impl NotificationView {
    pub fn from_item(item: &NotificationItem, avatars: &AvatarResolver) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            unread: !item.read,
            creator_name: item.creator_name().to_string(),
            creator_role: item.creator_role().to_string(),
            avatar: avatars.resolve(item.creator_picture()),
            when: item.event_details.formatted(),
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationBell {
    open: bool,
    cursor: usize,
    subscription: Option<Subscription>,
}

impl NotificationBell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for outside clicks
    pub fn mount(&mut self, dispatcher: &PointerDispatcher) {
        self.subscription = Some(dispatcher.subscribe());
    }

    /// Stop listening for outside clicks
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    pub fn listener_id(&self) -> Option<ListenerId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    /// Update the region that counts as "inside" the widget
    pub fn set_region(&self, anchor: Rect, dropdown: Option<Rect>) {
        if let Some(sub) = &self.subscription {
            match dropdown {
                Some(dropdown) if self.open => sub.set_region(&[anchor, dropdown]),
                _ => sub.set_region(&[anchor]),
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.cursor = 0;
        debug!(open = self.open, "notification dropdown toggled");
    }

    /// Close because of a pointer-down outside the widget.
    /// Returns whether the dropdown was open.
    pub fn click_outside(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        debug!("notification dropdown dismissed by outside click");
        true
    }

    /// Route a dispatcher result; closes only if this bell was hit
    pub fn handle_outside(&mut self, listeners: &[ListenerId]) -> bool {
        match self.listener_id() {
            Some(id) if listeners.contains(&id) => self.click_outside(),
            _ => false,
        }
    }

    /// Ask the store to mark `id` read, then close
    pub fn select_item<F>(&mut self, id: u64, mark_as_read: F)
    where
        F: FnOnce(u64),
    {
        mark_as_read(id);
        self.open = false;
        debug!(id, "notification selected");
    }

    /// Move the keyboard cursor within the visible entries
    pub fn move_cursor(&mut self, delta: isize, visible: usize) {
        if visible == 0 {
            self.cursor = 0;
            return;
        }
        let max = visible - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Id under the keyboard cursor
    pub fn cursor_id(&self, items: &[NotificationItem]) -> Option<u64> {
        visible_notifications(items).get(self.cursor).map(|n| n.id)
    }
}
