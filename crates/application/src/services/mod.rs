mod validator_chain;

pub use validator_chain::{RegistrationValidator, ValidatorChain};
