//! Email section - institutional address suffix.

use super::SectionResult;
use crate::fields::FormFields;
use crate::outcome::ValidationFailure;
use crate::policy::RegistrationPolicy;

/// Checks the email ends with the policy suffix.
///
/// Plain case-sensitive suffix match; the domain is not resolved.
pub fn email_domain_section(fields: &FormFields, policy: &RegistrationPolicy) -> SectionResult {
    if !fields.email.ends_with(policy.email_suffix()) {
        return Err(ValidationFailure::InvalidEmail {
            required_suffix: policy.email_suffix().to_string(),
        });
    }
    Ok(())
}
