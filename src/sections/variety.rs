//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::fields::FormFields;
use crate::outcome::ValidationFailure;
use crate::policy::RegistrationPolicy;

/// Punctuation accepted as a special character. Backtick and tilde are not in the set.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Character classes a password is checked against. Letters and digits are ASCII only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => SPECIAL_CHARACTERS.contains(c),
        }
    }

    /// True if at least one character of `text` belongs to this class.
    pub fn occurs_in(self, text: &str) -> bool {
        text.chars().any(|c| self.matches(c))
    }
}

/// Checks the password contains every character class.
pub fn character_variety_section(
    fields: &FormFields,
    _policy: &RegistrationPolicy,
) -> SectionResult {
    let pwd = fields.password.expose_secret();
    if !CharClass::ALL.iter().all(|class| class.occurs_in(pwd)) {
        return Err(ValidationFailure::PasswordComposition);
    }
    Ok(())
}
