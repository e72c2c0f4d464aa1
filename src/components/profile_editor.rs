//! Profile editor state machine
//!
//! ```text
//!   Viewing --begin_edit--> Editing --begin_save--> Saving
//!      ^                     |   ^                    |
//!      +-------cancel--------+   +---finish_save(Err)-+
//!      ^                                              |
//!      +----------------finish_save(Ok)---------------+
//! ```
//!
//! The draft is only mutable in `Editing`. Cancel restores the last
//! persisted record. A failed save keeps the draft and records the error.

use crate::error::{PortalError, ValidationError};
use crate::portal::validate::validate_profile;
use crate::types::{ProfileField, ProfileRecord};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Viewing,
    Editing,
    Saving,
}

impl EditorMode {
    pub fn label(&self) -> &'static str {
        match self {
            EditorMode::Viewing => "Viewing",
            EditorMode::Editing => "Editing",
            EditorMode::Saving => "Saving...",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileEditor {
    mode: EditorMode,
    persisted: ProfileRecord,
    draft: ProfileRecord,
    focus: ProfileField,
    error: Option<PortalError>,
}

impl ProfileEditor {
    pub fn new(profile: ProfileRecord) -> Self {
        Self {
            mode: EditorMode::Viewing,
            draft: profile.clone(),
            persisted: profile,
            focus: ProfileField::default(),
            error: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The record as shown: the draft while editing, else the persisted one
    pub fn profile(&self) -> &ProfileRecord {
        &self.draft
    }

    pub fn persisted(&self) -> &ProfileRecord {
        &self.persisted
    }

    pub fn focus(&self) -> ProfileField {
        self.focus
    }

    /// Inline error from the last rejected save
    pub fn error(&self) -> Option<&PortalError> {
        self.error.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.persisted
    }

    /// Viewing -> Editing
    pub fn begin_edit(&mut self) -> bool {
        if self.mode != EditorMode::Viewing {
            return false;
        }
        self.mode = EditorMode::Editing;
        self.focus = ProfileField::default();
        self.error = None;
        debug!("profile editor: editing");
        true
    }

    /// Editing -> Viewing, discarding the draft
    pub fn cancel(&mut self) -> bool {
        if self.mode != EditorMode::Editing {
            return false;
        }
        self.draft = self.persisted.clone();
        self.mode = EditorMode::Viewing;
        self.error = None;
        debug!("profile editor: edit cancelled, draft reverted");
        true
    }

    /// Editing -> Saving.
    ///
    /// Returns the record to hand to the persistence API. A validation
    /// failure keeps the editor in `Editing` and is returned without any
    /// external call being made.
    pub fn begin_save(&mut self) -> Result<ProfileRecord, PortalError> {
        match self.mode {
            EditorMode::Editing => {}
            EditorMode::Saving => return Err(ValidationError::InProgress.into()),
            EditorMode::Viewing => return Err(ValidationError::NotEditing.into()),
        }

        if let Err(e) = validate_profile(&self.draft) {
            let err = PortalError::from(e);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.mode = EditorMode::Saving;
        self.error = None;
        debug!("profile editor: saving");
        Ok(self.draft.clone())
    }

    /// Apply the outcome of the persistence call
    pub fn finish_save(&mut self, result: Result<ProfileRecord, PortalError>) {
        if self.mode != EditorMode::Saving {
            warn!("save result arrived while not saving, ignored");
            return;
        }

        match result {
            Ok(stored) => {
                info!("profile saved");
                self.persisted = stored.clone();
                self.draft = stored;
                self.mode = EditorMode::Viewing;
                self.error = None;
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "profile save failed");
                self.mode = EditorMode::Editing;
                self.error = Some(e);
            }
        }
    }

    // === FIELD INPUT (Editing only) ===

    pub fn focus_next(&mut self) {
        if self.mode == EditorMode::Editing {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.mode == EditorMode::Editing {
            self.focus = self.focus.prev();
        }
    }

    pub fn set_focus(&mut self, field: ProfileField) {
        if self.mode == EditorMode::Editing {
            self.focus = field;
        }
    }

    pub fn input_char(&mut self, c: char) -> bool {
        if self.mode != EditorMode::Editing {
            return false;
        }
        self.draft.field_mut(self.focus).push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.mode != EditorMode::Editing {
            return false;
        }
        self.draft.field_mut(self.focus).pop().is_some()
    }

    /// Replace a field's value wholesale
    pub fn set_field(&mut self, field: ProfileField, value: &str) -> bool {
        if self.mode != EditorMode::Editing {
            return false;
        }
        *self.draft.field_mut(field) = value.to_string();
        true
    }
}
