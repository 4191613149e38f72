use async_trait::async_trait;
use mailgate_domain::{messages, DomainError, EmailAddress, RegistrationAttempt};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::WhitelistStore;
use crate::services::RegistrationValidator;

/// Runs late in the chain so syntactic validators get first say.
pub const EMAIL_DOMAIN_PRIORITY: i32 = 40;

/// Decides whether a registration's email domain is approved. Takes no
/// position on emails it cannot parse; syntactic email validation
/// belongs to other validators.
pub struct CheckEmailDomainUseCase {
    store: Arc<dyn WhitelistStore>,
}

impl CheckEmailDomainUseCase {
    pub fn new(store: Arc<dyn WhitelistStore>) -> Self {
        Self { store }
    }

    /// Returns the updated rejection message, or `None` when this guard
    /// has no objection.
    #[instrument(skip(self, message, attempt), name = "check_email_domain")]
    pub async fn execute(
        &self,
        message: &str,
        attempt: &RegistrationAttempt,
    ) -> Result<Option<String>, DomainError> {
        let Some(raw) = attempt.email() else {
            return Ok(None);
        };
        let Some(email) = EmailAddress::parse(raw) else {
            return Ok(None);
        };

        let whitelist = self.store.get().await?;
        if whitelist.contains(email.domain()) {
            return Ok(None);
        }

        debug!(domain = %email.domain(), "Registration email domain not whitelisted");
        let rejection = if message.is_empty() {
            messages::DOMAIN_NOT_ALLOWED.to_string()
        } else {
            format!("{message}\n{}", messages::DOMAIN_NOT_ALLOWED)
        };
        Ok(Some(rejection))
    }
}

#[async_trait]
impl RegistrationValidator for CheckEmailDomainUseCase {
    fn priority(&self) -> i32 {
        EMAIL_DOMAIN_PRIORITY
    }

    async fn check(
        &self,
        message: &str,
        attempt: &RegistrationAttempt,
    ) -> Result<Option<String>, DomainError> {
        self.execute(message, attempt).await
    }
}
