//! Password change form
//!
//! Three fields, each with its own visibility flag. The flags never
//! affect one another.

use crate::error::{PortalError, ValidationError};
use crate::portal::validate::validate_password_change;
use crate::types::PasswordChangeRequest;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordField {
    #[default]
    Current,
    New,
    Confirm,
}

impl PasswordField {
    pub fn all() -> &'static [PasswordField] {
        &[PasswordField::Current, PasswordField::New, PasswordField::Confirm]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordField::Current => "Current password",
            PasswordField::New => "New password",
            PasswordField::Confirm => "Confirm new password",
        }
    }

    fn index(&self) -> usize {
        match self {
            PasswordField::Current => 0,
            PasswordField::New => 1,
            PasswordField::Confirm => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PasswordField::Current => PasswordField::New,
            PasswordField::New => PasswordField::Confirm,
            PasswordField::Confirm => PasswordField::Current,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            PasswordField::Current => PasswordField::Confirm,
            PasswordField::New => PasswordField::Current,
            PasswordField::Confirm => PasswordField::New,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PasswordForm {
    values: [String; 3],
    visible: [bool; 3],
    focus: PasswordField,
    submitting: bool,
    error: Option<PortalError>,
    min_length: usize,
}

impl PasswordForm {
    pub fn new(min_length: usize) -> Self {
        Self {
            values: Default::default(),
            visible: [false; 3],
            focus: PasswordField::default(),
            submitting: false,
            error: None,
            min_length,
        }
    }

    pub fn value(&self, field: PasswordField) -> &str {
        &self.values[field.index()]
    }

    pub fn is_visible(&self, field: PasswordField) -> bool {
        self.visible[field.index()]
    }

    /// Text to render: the value itself, or one bullet per character
    pub fn display_value(&self, field: PasswordField) -> String {
        let value = self.value(field);
        if self.is_visible(field) {
            value.to_string()
        } else {
            "•".repeat(value.chars().count())
        }
    }

    pub fn focus(&self) -> PasswordField {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&PortalError> {
        self.error.as_ref()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Flip one field's visibility
    pub fn toggle_visibility(&mut self, field: PasswordField) {
        let flag = &mut self.visible[field.index()];
        *flag = !*flag;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, field: PasswordField) {
        self.focus = field;
    }

    pub fn input_char(&mut self, c: char) -> bool {
        if self.submitting {
            return false;
        }
        self.values[self.focus.index()].push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.values[self.focus.index()].pop().is_some()
    }

    /// Clear all fields and any error. Visibility flags are kept.
    pub fn clear(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        for value in &mut self.values {
            value.clear();
        }
        self.error = None;
        self.focus = PasswordField::default();
        true
    }

    /// Validate and enter the submitting state
    pub fn begin_submit(&mut self) -> Result<PasswordChangeRequest, PortalError> {
        if self.submitting {
            return Err(ValidationError::InProgress.into());
        }

        let request = PasswordChangeRequest {
            current_password: self.values[0].clone(),
            new_password: self.values[1].clone(),
            confirm_new_password: self.values[2].clone(),
        };

        if let Err(e) = validate_password_change(&request, self.min_length) {
            let err = PortalError::from(e);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.submitting = true;
        self.error = None;
        debug!("password form: submitting");
        Ok(request)
    }

    /// Apply the outcome of the change-password call
    pub fn finish_submit(&mut self, result: Result<(), PortalError>) {
        if !self.submitting {
            warn!("password result arrived while not submitting, ignored");
            return;
        }
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("password updated");
                self.clear();
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "password update failed");
                self.error = Some(e);
            }
        }
    }
}
