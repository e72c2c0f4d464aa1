//! Error taxonomy for profile and password submissions

use thiserror::Error;

/// Failure of a save or password change
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    /// Input rejected before (or by) the backend; the user must fix it
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transient transport failure, safe to retry
    #[error("Network error: {0}")]
    Network(String),

    /// Session is no longer valid, the user must sign in again
    #[error("Authentication required: {0}")]
    Auth(String),
}

impl PortalError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, PortalError::Network(_))
    }

    pub fn requires_reauth(&self) -> bool {
        matches!(self, PortalError::Auth(_))
    }

    /// Short label for popups and logs
    pub fn kind(&self) -> &'static str {
        match self {
            PortalError::Validation(_) => "validation",
            PortalError::Network(_) => "network",
            PortalError::Auth(_) => "auth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("New password must differ from the current one")]
    PasswordUnchanged,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("Nothing to save, press e to edit first")]
    NotEditing,

    #[error("A submission is already in progress")]
    InProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let network = PortalError::Network("timed out".into());
        assert!(network.is_retryable());
        assert!(!network.requires_reauth());

        let auth = PortalError::Auth("session expired".into());
        assert!(!auth.is_retryable());
        assert!(auth.requires_reauth());

        let validation: PortalError = ValidationError::PasswordMismatch.into();
        assert_eq!(validation.kind(), "validation");
        assert_eq!(validation.to_string(), "New passwords do not match");
    }

    #[test]
    fn test_missing_field_message() {
        let err = PortalError::from(ValidationError::MissingField("First name"));
        assert_eq!(err.to_string(), "First name is required");
    }
}
