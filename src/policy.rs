//! Registration policy
//!
//! Holds the institutional email suffix and the minimum password length
//! the validator enforces, with optional overrides from the environment.

use std::env::VarError;
use std::num::ParseIntError;
use thiserror::Error;

/// Email suffix accepted when no override is configured.
pub const DEFAULT_EMAIL_SUFFIX: &str = "@student.uwl.ac.uk";

/// Minimum password length when no override is configured.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const EMAIL_SUFFIX_ENV: &str = "SIGNUP_EMAIL_SUFFIX";
pub const MIN_PASSWORD_LENGTH_ENV: &str = "SIGNUP_MIN_PASSWORD_LENGTH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Email suffix must start with '@': {0:?}")]
    InvalidEmailSuffix(String),
    #[error("Invalid minimum password length {value:?}: {source}")]
    InvalidMinLength {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Minimum password length must be greater than zero")]
    ZeroMinLength,
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Reads an override; only an unset variable yields `None`.
fn read_override(key: &'static str) -> Result<Option<String>, PolicyError> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(PolicyError::NotUnicode(key)),
    }
}

/// Rules the validator applies to email and password fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPolicy {
    email_suffix: String,
    min_password_length: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            email_suffix: DEFAULT_EMAIL_SUFFIX.to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl RegistrationPolicy {
    /// Builds a policy from explicit values.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `email_suffix` does not start with `@` (an empty suffix included)
    /// - `min_password_length` is zero
    pub fn new(
        email_suffix: impl Into<String>,
        min_password_length: usize,
    ) -> Result<Self, PolicyError> {
        let email_suffix = email_suffix.into();
        if !email_suffix.starts_with('@') {
            return Err(PolicyError::InvalidEmailSuffix(email_suffix));
        }
        if min_password_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        Ok(Self {
            email_suffix,
            min_password_length,
        })
    }

    /// Loads the policy from the environment.
    ///
    /// Priority for each value:
    /// 1. Environment variable (`SIGNUP_EMAIL_SUFFIX`, `SIGNUP_MIN_PASSWORD_LENGTH`)
    /// 2. Built-in default (`@student.uwl.ac.uk`, `8`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to a value [`RegistrationPolicy::new`] rejects,
    /// the length is not an unsigned integer, or a value is not valid unicode.
    pub fn from_env() -> Result<Self, PolicyError> {
        let email_suffix = read_override(EMAIL_SUFFIX_ENV)?
            .unwrap_or_else(|| DEFAULT_EMAIL_SUFFIX.to_string());

        let min_password_length = match read_override(MIN_PASSWORD_LENGTH_ENV)? {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|source| PolicyError::InvalidMinLength {
                    value: raw.clone(),
                    source,
                })?,
            None => DEFAULT_MIN_PASSWORD_LENGTH,
        };

        let policy = Self::new(email_suffix, min_password_length);

        #[cfg(feature = "tracing")]
        {
            match &policy {
                Ok(p) => tracing::info!(
                    "Registration policy loaded: suffix {}, min length {}",
                    p.email_suffix,
                    p.min_password_length
                ),
                Err(e) => tracing::error!("Registration policy rejected: {}", e),
            }
        }

        policy
    }

    pub fn email_suffix(&self) -> &str {
        &self.email_suffix
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }
}
