use mailgate_domain::{DomainError, Whitelist};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::WhitelistStore;

/// Result of one admin submission. Validation failures are data, not
/// errors: nothing is persisted and the raw input is echoed back for
/// correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistUpdateOutcome {
    Saved {
        whitelist: Whitelist,
    },
    Rejected {
        errors: Vec<String>,
        submitted: String,
    },
}

pub struct UpdateWhitelistUseCase {
    store: Arc<dyn WhitelistStore>,
}

impl UpdateWhitelistUseCase {
    pub fn new(store: Arc<dyn WhitelistStore>) -> Self {
        Self { store }
    }

    /// Parses the submitted text, validates every candidate in one pass,
    /// and persists all-or-nothing.
    #[instrument(skip(self, submitted), name = "update_whitelist")]
    pub async fn execute(&self, submitted: &str) -> Result<WhitelistUpdateOutcome, DomainError> {
        let whitelist = Whitelist::parse(submitted);
        let errors = whitelist.validate();

        if !errors.is_empty() {
            warn!(rejected = errors.len(), "Whitelist submission rejected");
            return Ok(WhitelistUpdateOutcome::Rejected {
                errors,
                submitted: submitted.to_string(),
            });
        }

        self.store.set(&whitelist).await?;
        info!(count = whitelist.len(), "Whitelist replaced");
        Ok(WhitelistUpdateOutcome::Saved { whitelist })
    }
}
