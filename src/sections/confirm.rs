//! Confirmation section - password and confirmation must match.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::fields::FormFields;
use crate::outcome::ValidationFailure;
use crate::policy::RegistrationPolicy;

pub fn confirmation_section(fields: &FormFields, _policy: &RegistrationPolicy) -> SectionResult {
    if fields.password.expose_secret() != fields.confirm_password.expose_secret() {
        return Err(ValidationFailure::PasswordMismatch);
    }
    Ok(())
}
