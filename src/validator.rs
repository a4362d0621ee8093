//! Registration validator - runs the rule sections in order.

use crate::fields::FormFields;
use crate::outcome::{ValidationResult, Welcome};
use crate::policy::RegistrationPolicy;
use crate::sections::{
    character_variety_section, confirmation_section, email_domain_section,
    email_presence_section, length_section, name_presence_section, password_presence_section,
    Section,
};

/// Validates the form against the default policy.
///
/// See [`validate_with`].
pub fn validate(fields: &FormFields) -> ValidationResult {
    validate_with(fields, &RegistrationPolicy::default())
}

/// Validates the form and returns the first broken rule, or a [`Welcome`].
///
/// Rules run in this order and stop at the first failure:
/// first name, last name, email present, email suffix, password present,
/// password length, password character classes, confirmation.
pub fn validate_with(fields: &FormFields, policy: &RegistrationPolicy) -> ValidationResult {
    let sections: [(&str, Section); 7] = [
        ("names", name_presence_section),
        ("email", email_presence_section),
        ("email_domain", email_domain_section),
        ("password", password_presence_section),
        ("length", length_section),
        ("variety", character_variety_section),
        ("confirmation", confirmation_section),
    ];

    for (section_name, section_fn) in sections {
        if let Err(failure) = section_fn(fields, policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Registration rejected by section {}: {}", section_name, failure);
            #[cfg(not(feature = "tracing"))]
            let _ = section_name;
            return Err(failure);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Registration accepted");

    Ok(Welcome {
        first_name: fields.first_name.clone(),
        last_name: fields.last_name.clone(),
    })
}
