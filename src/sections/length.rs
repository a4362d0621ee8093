//! Length section - checks password minimum length.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::fields::FormFields;
use crate::outcome::ValidationFailure;
use crate::policy::RegistrationPolicy;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two.
pub fn length_section(fields: &FormFields, policy: &RegistrationPolicy) -> SectionResult {
    let min_length = policy.min_password_length();
    if fields.password.expose_secret().encode_utf16().count() < min_length {
        return Err(ValidationFailure::PasswordTooShort { min_length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        let fields = FormFields::new("Ada", "Lovelace", "ada@student.uwl.ac.uk", pwd, pwd);
        length_section(&fields, &RegistrationPolicy::default())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(check("Abcdefg"), Err(ValidationFailure::PasswordTooShort { min_length: 8 }));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(check("12345678"), Ok(()));
    }

    #[test]
    fn test_length_section_bmp_chars_count_once() {
        // Seven characters, fourteen bytes, seven UTF-16 units.
        assert!(check("ééééééé").is_err());
    }

    #[test]
    fn test_length_section_astral_chars_count_twice() {
        // Six characters, eight UTF-16 units.
        assert_eq!(check("Aa1!😀😀"), Ok(()));
        assert!(check("Aa1!😀").is_err());
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let policy = RegistrationPolicy::new("@student.uwl.ac.uk", 12).unwrap();
        let fields = FormFields::new("Ada", "Lovelace", "ada@student.uwl.ac.uk", "Abcdef1!xyz", "");
        assert_eq!(
            length_section(&fields, &policy),
            Err(ValidationFailure::PasswordTooShort { min_length: 12 })
        );
    }
}
