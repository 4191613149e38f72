mod get_whitelist;
mod update_whitelist;

pub use get_whitelist::GetWhitelistUseCase;
pub use update_whitelist::{UpdateWhitelistUseCase, WhitelistUpdateOutcome};
