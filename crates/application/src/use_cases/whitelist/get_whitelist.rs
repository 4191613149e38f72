use mailgate_domain::{DomainError, Whitelist};
use std::sync::Arc;

use crate::ports::WhitelistStore;

/// Admin read path. Carries no validation.
pub struct GetWhitelistUseCase {
    store: Arc<dyn WhitelistStore>,
}

impl GetWhitelistUseCase {
    pub fn new(store: Arc<dyn WhitelistStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Whitelist, DomainError> {
        self.store.get().await
    }
}
