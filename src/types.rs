//! Core data types for orgportal
//!
//! This module defines the domain records shared by the components:
//! profile, password change request, notifications and the editor tabs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name shown when a notification has no creator attached
pub const DEFAULT_CREATOR_NAME: &str = "Event Creator";

/// Role shown when a notification's creator has no role
pub const DEFAULT_CREATOR_ROLE: &str = "COA";

/// The signed-in member's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub suffix: String,
    /// Read-only in the editor
    pub email: String,
    /// Read-only in the editor
    pub role: String,
}

impl ProfileRecord {
    /// Full display name, e.g. "Maria C. Santos Jr."
    pub fn display_name(&self) -> String {
        let mut parts: Vec<String> = vec![self.first_name.trim().to_string()];
        if let Some(initial) = self.middle_name.trim().chars().next() {
            parts.push(format!("{}.", initial));
        }
        parts.push(self.last_name.trim().to_string());
        if !self.suffix.trim().is_empty() {
            parts.push(self.suffix.trim().to_string());
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }

    /// Mutable access to an editable field
    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::MiddleName => &mut self.middle_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Suffix => &mut self.suffix,
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::MiddleName => &self.middle_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Suffix => &self.suffix,
        }
    }
}

/// Editable profile fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    FirstName,
    MiddleName,
    LastName,
    Suffix,
}

impl ProfileField {
    pub fn all() -> &'static [ProfileField] {
        &[
            ProfileField::FirstName,
            ProfileField::MiddleName,
            ProfileField::LastName,
            ProfileField::Suffix,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name",
            ProfileField::MiddleName => "Middle name",
            ProfileField::LastName => "Last name",
            ProfileField::Suffix => "Suffix",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ProfileField::FirstName | ProfileField::LastName)
    }

    pub fn next(&self) -> Self {
        match self {
            ProfileField::FirstName => ProfileField::MiddleName,
            ProfileField::MiddleName => ProfileField::LastName,
            ProfileField::LastName => ProfileField::Suffix,
            ProfileField::Suffix => ProfileField::FirstName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ProfileField::FirstName => ProfileField::Suffix,
            ProfileField::MiddleName => ProfileField::FirstName,
            ProfileField::LastName => ProfileField::MiddleName,
            ProfileField::Suffix => ProfileField::LastName,
        }
    }
}

/// A password change submission. Never persisted locally.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl fmt::Debug for PasswordChangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChangeRequest")
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .field("confirm_new_password", &"<redacted>")
            .finish()
    }
}

/// Who created the event behind a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Creator {
    pub name: Option<String>,
    pub role: Option<String>,
    pub profile_pic: Option<String>,
}

/// When the event takes place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

impl EventDetails {
    /// Format for display, e.g. "Mar 03, 2026 · 14:00"
    pub fn formatted(&self) -> String {
        let date = self.date.format("%b %d, %Y").to_string();
        match self.time {
            Some(time) => format!("{} · {}", date, time.format("%H:%M")),
            None => date,
        }
    }
}

/// A notification owned by the external store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub creator: Option<Creator>,
    pub event_details: EventDetails,
}

impl NotificationItem {
    /// Creator name with fallback
    pub fn creator_name(&self) -> &str {
        self.creator
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_CREATOR_NAME)
    }

    /// Creator role with fallback
    pub fn creator_role(&self) -> &str {
        self.creator
            .as_ref()
            .and_then(|c| c.role.as_deref())
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_CREATOR_ROLE)
    }

    /// Creator picture, if any was supplied
    pub fn creator_picture(&self) -> Option<&str> {
        self.creator
            .as_ref()
            .and_then(|c| c.profile_pic.as_deref())
            .filter(|p| !p.trim().is_empty())
    }
}

/// Editor tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Password,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Profile, Tab::Password]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Profile => 0,
            Tab::Password => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Password => "Password",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Tab::Profile => Tab::Password,
            Tab::Password => Tab::Profile,
        }
    }
}
