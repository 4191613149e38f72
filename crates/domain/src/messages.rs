//! User-visible sentences. The wording is matched verbatim by existing
//! integrations, so changes here are breaking.

/// Returned to a registrant whose email domain is not approved.
pub const DOMAIN_NOT_ALLOWED: &str =
    "Sorry, only email addresses from registered domains are allowed.";

/// Confirmation shown after a successful whitelist save.
pub const WHITELIST_SAVED: &str = "Successfully whitelisted domains.";

/// Heading for the itemized errors of a rejected save.
pub const CORRECT_PROBLEMS: &str = "Please correct the following problems:";

pub(crate) const INVALID_DOMAIN_SUFFIX: &str = " is not a valid domain.";
