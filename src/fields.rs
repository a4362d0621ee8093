//! Form field values and the change events that update them.

use secrecy::SecretString;

/// Values of the registration form for one attempt.
///
/// Password fields are held as [`SecretString`] so they are redacted from
/// `Debug` output.
#[derive(Debug)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new("", "", "", "", "")
    }
}

impl FormFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: SecretString::new(password.into().into()),
            confirm_password: SecretString::new(confirm_password.into().into()),
        }
    }
}

/// A single edit coming from the UI, carrying the field's new full text.
#[derive(Debug)]
pub enum FieldChange {
    FirstName(String),
    LastName(String),
    Email(String),
    Password(SecretString),
    ConfirmPassword(SecretString),
}

impl FieldChange {
    /// Writes the new value into `fields`.
    ///
    /// Returns `true` when the password changed and the strength indicator
    /// needs recomputing.
    pub fn apply_to(self, fields: &mut FormFields) -> bool {
        match self {
            FieldChange::FirstName(v) => fields.first_name = v,
            FieldChange::LastName(v) => fields.last_name = v,
            FieldChange::Email(v) => fields.email = v,
            FieldChange::Password(v) => {
                fields.password = v;
                return true;
            }
            FieldChange::ConfirmPassword(v) => fields.confirm_password = v,
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_fields_are_empty() {
        let fields = FormFields::default();
        assert!(fields.first_name.is_empty());
        assert!(fields.password.expose_secret().is_empty());
        assert!(fields.confirm_password.expose_secret().is_empty());
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let fields =
            FormFields::new("Ada", "Lovelace", "ada@student.uwl.ac.uk", "Hunter2!x", "Hunter2!x");
        let rendered = format!("{:?}", fields);
        assert!(rendered.contains("Ada"));
        assert!(!rendered.contains("Hunter2!x"));
    }

    #[test]
    fn test_apply_password_reports_change() {
        let mut fields = FormFields::default();
        let change = FieldChange::Password(SecretString::new("abc".to_string().into()));
        let changed = change.apply_to(&mut fields);
        assert!(changed);
        assert_eq!(fields.password.expose_secret(), "abc");
    }

    #[test]
    fn test_apply_other_fields() {
        let mut fields = FormFields::default();
        assert!(!FieldChange::FirstName("Ada".into()).apply_to(&mut fields));
        assert!(!FieldChange::LastName("Lovelace".into()).apply_to(&mut fields));
        assert!(!FieldChange::Email("ada@student.uwl.ac.uk".into()).apply_to(&mut fields));
        let confirm = FieldChange::ConfirmPassword(SecretString::new("x".to_string().into()));
        assert!(!confirm.apply_to(&mut fields));

        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.last_name, "Lovelace");
        assert_eq!(fields.email, "ada@student.uwl.ac.uk");
        assert_eq!(fields.confirm_password.expose_secret(), "x");
    }
}
