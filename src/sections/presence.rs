//! Presence sections - required fields must not be empty.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::fields::FormFields;
use crate::outcome::ValidationFailure;
use crate::policy::RegistrationPolicy;

/// Checks first name, then last name.
pub fn name_presence_section(fields: &FormFields, _policy: &RegistrationPolicy) -> SectionResult {
    if fields.first_name.is_empty() {
        return Err(ValidationFailure::MissingFirstName);
    }
    if fields.last_name.is_empty() {
        return Err(ValidationFailure::MissingLastName);
    }
    Ok(())
}

pub fn email_presence_section(fields: &FormFields, _policy: &RegistrationPolicy) -> SectionResult {
    if fields.email.is_empty() {
        return Err(ValidationFailure::MissingEmail);
    }
    Ok(())
}

pub fn password_presence_section(
    fields: &FormFields,
    _policy: &RegistrationPolicy,
) -> SectionResult {
    if fields.password.expose_secret().is_empty() {
        return Err(ValidationFailure::MissingPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RegistrationPolicy {
        RegistrationPolicy::default()
    }

    #[test]
    fn test_first_name_checked_before_last_name() {
        let fields = FormFields::new("", "", "x", "x", "x");
        assert_eq!(
            name_presence_section(&fields, &policy()),
            Err(ValidationFailure::MissingFirstName)
        );
    }

    #[test]
    fn test_missing_last_name() {
        let fields = FormFields::new("Ada", "", "", "", "");
        assert_eq!(
            name_presence_section(&fields, &policy()),
            Err(ValidationFailure::MissingLastName)
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let fields = FormFields::new(" ", " ", " ", " ", "");
        assert_eq!(name_presence_section(&fields, &policy()), Ok(()));
        assert_eq!(email_presence_section(&fields, &policy()), Ok(()));
        assert_eq!(password_presence_section(&fields, &policy()), Ok(()));
    }

    #[test]
    fn test_missing_email_and_password() {
        let fields = FormFields::default();
        assert_eq!(
            email_presence_section(&fields, &policy()),
            Err(ValidationFailure::MissingEmail)
        );
        assert_eq!(
            password_presence_section(&fields, &policy()),
            Err(ValidationFailure::MissingPassword)
        );
    }
}
