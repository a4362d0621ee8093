//! Submission outcomes: the failure taxonomy and the success value.

use thiserror::Error;

/// Title shown on a successful registration.
pub const SUCCESS_TITLE: &str = "Registration Successful!";

pub type ValidationResult = Result<Welcome, ValidationFailure>;

/// Why a submission was rejected.
///
/// `Display` renders the alert title; [`ValidationFailure::message`] gives
/// the body, which is empty for missing-field failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter your first name")]
    MissingFirstName,
    #[error("Please enter your last name")]
    MissingLastName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Invalid Email")]
    InvalidEmail { required_suffix: String },
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Password Requirement")]
    PasswordTooShort { min_length: usize },
    #[error("Password Requirement")]
    PasswordComposition,
    #[error("Password Mismatch")]
    PasswordMismatch,
}

impl ValidationFailure {
    pub fn title(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> String {
        match self {
            ValidationFailure::MissingFirstName
            | ValidationFailure::MissingLastName
            | ValidationFailure::MissingEmail
            | ValidationFailure::MissingPassword => String::new(),
            ValidationFailure::InvalidEmail { required_suffix } => format!(
                "Please use a valid email address ending with {}",
                required_suffix
            ),
            ValidationFailure::PasswordTooShort { min_length } => format!(
                "Password must be at least {} characters long",
                min_length
            ),
            ValidationFailure::PasswordComposition => "Password must contain at least one \
                uppercase letter, one lowercase letter, one number, and one special character"
                .to_string(),
            ValidationFailure::PasswordMismatch => {
                "Password and confirm password do not match".to_string()
            }
        }
    }
}

/// A submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub first_name: String,
    pub last_name: String,
}

impl Welcome {
    pub fn title(&self) -> &'static str {
        SUCCESS_TITLE
    }

    pub fn message(&self) -> String {
        format!("Welcome, {} {}!", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_failures_have_empty_message() {
        for failure in [
            ValidationFailure::MissingFirstName,
            ValidationFailure::MissingLastName,
            ValidationFailure::MissingEmail,
            ValidationFailure::MissingPassword,
        ] {
            assert!(failure.message().is_empty(), "{} should have no body", failure);
        }
    }

    #[test]
    fn test_invalid_email_text() {
        let failure = ValidationFailure::InvalidEmail {
            required_suffix: "@student.uwl.ac.uk".to_string(),
        };
        assert_eq!(failure.title(), "Invalid Email");
        assert_eq!(
            failure.message(),
            "Please use a valid email address ending with @student.uwl.ac.uk"
        );
    }

    #[test]
    fn test_password_requirement_titles_are_shared() {
        let short = ValidationFailure::PasswordTooShort { min_length: 8 };
        assert_eq!(short.title(), "Password Requirement");
        assert_eq!(short.message(), "Password must be at least 8 characters long");
        assert_eq!(ValidationFailure::PasswordComposition.title(), "Password Requirement");
    }

    #[test]
    fn test_welcome_message() {
        let welcome = Welcome {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(welcome.title(), "Registration Successful!");
        assert_eq!(welcome.message(), "Welcome, Ada Lovelace!");
    }
}
