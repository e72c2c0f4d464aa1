//! Seed data for the simulated portal
//!
//! Loaded from a JSON file when `data_file` is configured, otherwise a
//! built-in demo set is used.

use crate::types::{Creator, EventDetails, NotificationItem, ProfileRecord};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the simulated backend and store start with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalData {
    pub profile: ProfileRecord,
    /// Password the simulated backend accepts as "current"
    #[serde(default = "default_password")]
    pub password: String,
    /// Newest first
    #[serde(default)]
    pub notifications: Vec<NotificationItem>,
}

fn default_password() -> String {
    "changeme123".to_string()
}

impl PortalData {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portal data from {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse portal data from {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from `path` if given, else fall back to the demo set
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::demo()),
        }
    }

    /// Built-in demo data
    pub fn demo() -> Self {
        let creator = |name: &str, role: &str, pic: Option<&str>| {
            Some(Creator {
                name: Some(name.to_string()),
                role: Some(role.to_string()),
                profile_pic: pic.map(str::to_string),
            })
        };
        let when = |m: u32, d: u32, hm: Option<(u32, u32)>| EventDetails {
            date: NaiveDate::from_ymd_opt(2026, m, d).unwrap_or(NaiveDate::MIN),
            time: hm.and_then(|(h, min)| NaiveTime::from_hms_opt(h, min, 0)),
        };

        let notifications = vec![
            NotificationItem {
                id: 1,
                title: "General Assembly: Q4 planning".into(),
                read: false,
                creator: creator("Student Council", "Officer", Some("assets/council.png")),
                event_details: when(10, 20, Some((15, 0))),
            },
            NotificationItem {
                id: 2,
                title: "Org fair booth sign-ups open".into(),
                read: true,
                creator: creator("Events Committee", "Adviser", None),
                event_details: when(10, 18, None),
            },
            NotificationItem {
                id: 3,
                title: "Membership dues reminder".into(),
                read: false,
                creator: None,
                event_details: when(10, 17, Some((9, 30))),
            },
            NotificationItem {
                id: 4,
                title: "Workshop: Intro to Public Speaking".into(),
                read: true,
                creator: creator("Debate Society", "Officer", Some("assets/missing.png")),
                event_details: when(10, 15, Some((13, 0))),
            },
            NotificationItem {
                id: 5,
                title: "Volunteer call: Coastal clean-up".into(),
                read: false,
                creator: creator("Green Campus", "", None),
                event_details: when(10, 12, Some((6, 0))),
            },
            NotificationItem {
                id: 6,
                title: "Election results posted".into(),
                read: true,
                creator: creator("COMELEC", "COA", None),
                event_details: when(10, 10, None),
            },
            NotificationItem {
                id: 7,
                title: "Budget liquidation deadline".into(),
                read: true,
                creator: creator("Treasury", "COA", None),
                event_details: when(10, 8, Some((17, 0))),
            },
            NotificationItem {
                id: 8,
                title: "Welcome to the portal".into(),
                read: true,
                creator: None,
                event_details: when(10, 1, None),
            },
        ];

        Self {
            profile: ProfileRecord {
                first_name: "Maria".into(),
                last_name: "Santos".into(),
                middle_name: "Cruz".into(),
                suffix: String::new(),
                email: "maria.santos@example.edu".into(),
                role: "Member".into(),
            },
            password: default_password(),
            notifications,
        }
    }
}
