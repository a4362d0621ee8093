//! Registration form controller.
//!
//! Owns the state a registration screen needs between events: field
//! values, the current strength score and the alert being displayed.

use std::time::Duration;

use secrecy::SecretString;

use crate::fields::{FieldChange, FormFields};
use crate::outcome::{ValidationFailure, ValidationResult, Welcome};
use crate::policy::RegistrationPolicy;
use crate::strength::{score_secret, StrengthScore};
use crate::validator::validate_with;

/// Duration of the alert fade in and fade out.
pub const ALERT_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Failure,
    Success,
}

/// Modal message shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl From<&ValidationFailure> for Alert {
    fn from(failure: &ValidationFailure) -> Self {
        Alert {
            kind: AlertKind::Failure,
            title: failure.title(),
            message: failure.message(),
        }
    }
}

impl From<&Welcome> for Alert {
    fn from(welcome: &Welcome) -> Self {
        Alert {
            kind: AlertKind::Success,
            title: welcome.title().to_string(),
            message: welcome.message(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistrationForm {
    fields: FormFields,
    strength: StrengthScore,
    alert: Option<Alert>,
    policy: RegistrationPolicy,
}

impl RegistrationForm {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Applies a field edit; password edits rescore the strength indicator.
    pub fn apply(&mut self, change: FieldChange) {
        if change.apply_to(&mut self.fields) {
            self.strength = score_secret(&self.fields.password);
        }
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.apply(FieldChange::FirstName(value.into()));
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.apply(FieldChange::LastName(value.into()));
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.apply(FieldChange::Email(value.into()));
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.apply(FieldChange::Password(SecretString::new(value.into().into())));
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.apply(FieldChange::ConfirmPassword(SecretString::new(
            value.into().into(),
        )));
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn strength(&self) -> StrengthScore {
        self.strength
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Validates the current fields and shows the resulting alert.
    ///
    /// Fields are left as they are, whatever the outcome.
    pub fn submit(&mut self) -> ValidationResult {
        let result = validate_with(&self.fields, &self.policy);
        self.alert = Some(match &result {
            Ok(welcome) => Alert::from(welcome),
            Err(failure) => Alert::from(failure),
        });
        result
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Clears every field, the strength score and any alert. The policy is kept.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.strength = StrengthScore::default();
        self.alert = None;
    }
}
