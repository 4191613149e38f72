use async_trait::async_trait;
use mailgate_domain::{DomainError, RegistrationAttempt};
use std::sync::Arc;
use tracing::debug;

/// One link in the registration validation chain. Validators run in
/// ascending `priority` order; ties keep registration order.
#[async_trait]
pub trait RegistrationValidator: Send + Sync {
    fn priority(&self) -> i32;

    /// Returns the replacement validation message, or `None` to leave
    /// the accumulated message untouched.
    async fn check(
        &self,
        message: &str,
        attempt: &RegistrationAttempt,
    ) -> Result<Option<String>, DomainError>;
}

pub struct ValidatorChain {
    validators: Vec<Arc<dyn RegistrationValidator>>,
}

impl ValidatorChain {
    pub fn new(mut validators: Vec<Arc<dyn RegistrationValidator>>) -> Self {
        validators.sort_by_key(|v| v.priority());
        Self { validators }
    }

    /// Folds `message` through every validator and returns the final
    /// accumulated message, or `None` when it ends up empty. A non-empty
    /// result means the registration attempt is rejected.
    pub async fn run(
        &self,
        message: String,
        attempt: &RegistrationAttempt,
    ) -> Result<Option<String>, DomainError> {
        let mut message = message;
        for validator in &self.validators {
            if let Some(updated) = validator.check(&message, attempt).await? {
                message = updated;
            }
        }
        debug!(
            allowed = message.is_empty(),
            "Registration validators evaluated"
        );
        Ok((!message.is_empty()).then_some(message))
    }
}
