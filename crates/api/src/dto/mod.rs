pub mod registration;
pub mod whitelist;

pub use registration::{RegistrationCheckRequest, RegistrationCheckResponse};
pub use whitelist::{SaveWhitelistRequest, SaveWhitelistResponse, WhitelistResponse};
