//! Registration form validation library
//!
//! This library provides the logic behind a student sign-up form:
//! ordered field validation, a password strength indicator and the
//! alert shown after each submit.
//!
//! # Features
//!
//! - `async` (default): Enables debounced strength scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_EMAIL_SUFFIX`: Required email suffix (default: `@student.uwl.ac.uk`)
//! - `SIGNUP_MIN_PASSWORD_LENGTH`: Minimum password length (default: `8`)
//!
//! # Example
//!
//! ```rust
//! use uwl_signup::{RegistrationForm, RegistrationPolicy, StrengthTier};
//!
//! let mut form = RegistrationForm::new(RegistrationPolicy::default());
//! form.set_first_name("Ada");
//! form.set_last_name("Lovelace");
//! form.set_email("ada@student.uwl.ac.uk");
//! form.set_password("Abcdef1!");
//! form.set_confirm_password("Abcdef1!");
//!
//! assert_eq!(form.strength().tier(), StrengthTier::Strong);
//! assert!(form.submit().is_ok());
//! assert_eq!(form.alert().unwrap().message, "Welcome, Ada Lovelace!");
//! ```

// Internal modules
mod fields;
mod form;
mod outcome;
mod policy;
mod sections;
mod strength;
mod validator;

// Public API
pub use fields::{FieldChange, FormFields};
pub use form::{Alert, AlertKind, RegistrationForm, ALERT_FADE};
pub use outcome::{ValidationFailure, ValidationResult, Welcome, SUCCESS_TITLE};
pub use policy::{
    PolicyError, RegistrationPolicy, DEFAULT_EMAIL_SUFFIX, DEFAULT_MIN_PASSWORD_LENGTH,
    EMAIL_SUFFIX_ENV, MIN_PASSWORD_LENGTH_ENV,
};
pub use sections::{CharClass, SPECIAL_CHARACTERS};
pub use strength::{score, score_secret, ScoreOutOfRange, StrengthScore, StrengthTier};
pub use validator::{validate, validate_with};

#[cfg(feature = "async")]
pub use strength::{score_password_tx, SCORE_DEBOUNCE};
