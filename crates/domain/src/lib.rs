//! Mailgate Domain Layer
pub mod config;
pub mod email;
pub mod errors;
pub mod messages;
pub mod registration;
pub mod whitelist;

pub use config::{CliOverrides, Config};
pub use email::EmailAddress;
pub use errors::DomainError;
pub use registration::RegistrationAttempt;
pub use whitelist::Whitelist;
