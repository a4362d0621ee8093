//! Registration rules
//!
//! Each section checks one group of rules and reports the first it finds
//! broken.

mod confirm;
mod email;
mod length;
mod presence;
mod variety;

pub use confirm::confirmation_section;
pub use email::email_domain_section;
pub use length::length_section;
pub use presence::{email_presence_section, name_presence_section, password_presence_section};
pub use variety::{character_variety_section, CharClass, SPECIAL_CHARACTERS};

use crate::fields::FormFields;
use crate::outcome::ValidationFailure;
use crate::policy::RegistrationPolicy;

/// Result type for section functions.
/// - `Ok(())` - Section passed
/// - `Err(failure)` - Section rejected the submission
pub type SectionResult = Result<(), ValidationFailure>;

/// Signature shared by every section so the validator can run them in order.
pub type Section = fn(&FormFields, &RegistrationPolicy) -> SectionResult;
