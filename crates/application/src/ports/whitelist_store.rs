use async_trait::async_trait;
use mailgate_domain::{DomainError, Whitelist};

/// Persistence seam for the whitelist. Implementations do no validation;
/// policy stays with the callers.
#[async_trait]
pub trait WhitelistStore: Send + Sync {
    /// The persisted whitelist, or an empty one if none was ever saved.
    async fn get(&self) -> Result<Whitelist, DomainError>;

    /// Replaces the persisted whitelist wholesale. A concurrent reader
    /// observes either the old or the new complete list.
    async fn set(&self, whitelist: &Whitelist) -> Result<(), DomainError>;
}
