mod check_email_domain;

pub use check_email_domain::{CheckEmailDomainUseCase, EMAIL_DOMAIN_PRIORITY};
