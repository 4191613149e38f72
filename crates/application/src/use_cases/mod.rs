pub mod registration;
pub mod whitelist;

pub use registration::{CheckEmailDomainUseCase, EMAIL_DOMAIN_PRIORITY};
pub use whitelist::{GetWhitelistUseCase, UpdateWhitelistUseCase, WhitelistUpdateOutcome};
