//! Client-side validation
//!
//! Runs before any external call; a failure here blocks submission.

use crate::error::ValidationError;
use crate::types::{PasswordChangeRequest, ProfileField, ProfileRecord};

/// Check that every required name field is filled in
pub fn validate_profile(profile: &ProfileRecord) -> Result<(), ValidationError> {
    for field in ProfileField::all() {
        if field.is_required() && profile.field(*field).trim().is_empty() {
            return Err(ValidationError::MissingField(field.label()));
        }
    }
    Ok(())
}

/// Check a password change request against the local policy
pub fn validate_password_change(
    request: &PasswordChangeRequest,
    min_length: usize,
) -> Result<(), ValidationError> {
    if request.current_password.is_empty() {
        return Err(ValidationError::MissingField("Current password"));
    }
    if request.new_password.is_empty() {
        return Err(ValidationError::MissingField("New password"));
    }
    if request.new_password.chars().count() < min_length {
        return Err(ValidationError::PasswordTooShort(min_length));
    }
    if request.new_password == request.current_password {
        return Err(ValidationError::PasswordUnchanged);
    }
    if request.new_password != request.confirm_new_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(current: &str, new: &str, confirm: &str) -> PasswordChangeRequest {
        PasswordChangeRequest {
            current_password: current.into(),
            new_password: new.into(),
            confirm_new_password: confirm.into(),
        }
    }

    #[test]
    fn test_profile_requires_names() {
        let mut profile = ProfileRecord {
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());

        profile.last_name = "   ".into();
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::MissingField("Last name"))
        );

        profile.first_name.clear();
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::MissingField("First name"))
        );
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let profile = ProfileRecord {
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            middle_name: String::new(),
            suffix: String::new(),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(
            validate_password_change(&request("", "longenough", "longenough"), 8),
            Err(ValidationError::MissingField("Current password"))
        );
        assert_eq!(
            validate_password_change(&request("old", "short", "short"), 8),
            Err(ValidationError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_password_change(&request("samesame1", "samesame1", "samesame1"), 8),
            Err(ValidationError::PasswordUnchanged)
        );
        assert_eq!(
            validate_password_change(&request("old", "longenough", "longenougH"), 8),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_password_change(&request("old", "longenough", "longenough"), 8).is_ok());
    }
}
