//! Interactive components
//!
//! State machines behind the two widgets, independent of rendering:
//! - Profile editor (view / edit / save) and password form
//! - Notification bell with its dropdown
//! - Pointer dispatcher for outside-click detection
//! - Avatar fallback resolution

pub mod avatar;
pub mod notification_bell;
pub mod password_form;
pub mod pointer;
pub mod profile_editor;

pub use avatar::AvatarResolver;
pub use notification_bell::{NotificationBell, NotificationView, MAX_VISIBLE_NOTIFICATIONS};
pub use password_form::{PasswordField, PasswordForm};
pub use pointer::PointerDispatcher;
pub use profile_editor::{EditorMode, ProfileEditor};
