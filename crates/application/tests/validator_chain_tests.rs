use async_trait::async_trait;
use mailgate_application::services::{RegistrationValidator, ValidatorChain};
use mailgate_application::use_cases::CheckEmailDomainUseCase;
use mailgate_domain::{DomainError, RegistrationAttempt};
use std::sync::{Arc, Mutex};

mod helpers;
use helpers::MockWhitelistStore;

struct StubValidator {
    label: &'static str,
    priority: i32,
    reply: Option<&'static str>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl StubValidator {
    fn new(
        label: &'static str,
        priority: i32,
        reply: Option<&'static str>,
        calls: Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn RegistrationValidator> {
        Arc::new(Self {
            label,
            priority,
            reply,
            calls,
        })
    }
}

#[async_trait]
impl RegistrationValidator for StubValidator {
    fn priority(&self) -> i32 {
        self.priority
    }

    async fn check(
        &self,
        _message: &str,
        _attempt: &RegistrationAttempt,
    ) -> Result<Option<String>, DomainError> {
        self.calls.lock().unwrap().push(self.label);
        Ok(self.reply.map(str::to_string))
    }
}

struct FailingValidator;

#[async_trait]
impl RegistrationValidator for FailingValidator {
    fn priority(&self) -> i32 {
        0
    }

    async fn check(
        &self,
        _message: &str,
        _attempt: &RegistrationAttempt,
    ) -> Result<Option<String>, DomainError> {
        Err(DomainError::DatabaseError("stub failure".to_string()))
    }
}

#[tokio::test]
async fn test_validators_run_in_ascending_priority_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let chain = ValidatorChain::new(vec![
        StubValidator::new("third", 30, None, calls.clone()),
        StubValidator::new("first", 10, None, calls.clone()),
        StubValidator::new("second", 20, None, calls.clone()),
    ]);

    chain
        .run(String::new(), &RegistrationAttempt::default())
        .await
        .unwrap();

    assert_eq!(*calls.lock().unwrap(), ["first", "second", "third"]);
}

#[tokio::test]
async fn test_equal_priority_keeps_registration_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let chain = ValidatorChain::new(vec![
        StubValidator::new("a", 10, None, calls.clone()),
        StubValidator::new("b", 10, None, calls.clone()),
    ]);

    chain
        .run(String::new(), &RegistrationAttempt::default())
        .await
        .unwrap();

    assert_eq!(*calls.lock().unwrap(), ["a", "b"]);
}

#[tokio::test]
async fn test_last_reply_wins() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let chain = ValidatorChain::new(vec![
        StubValidator::new("early", 10, Some("early message"), calls.clone()),
        StubValidator::new("late", 20, Some("late message"), calls.clone()),
    ]);

    let message = chain
        .run(String::new(), &RegistrationAttempt::default())
        .await
        .unwrap();

    assert_eq!(message.as_deref(), Some("late message"));
}

#[tokio::test]
async fn test_none_reply_leaves_message_untouched() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let chain = ValidatorChain::new(vec![
        StubValidator::new("reject", 10, Some("rejected"), calls.clone()),
        StubValidator::new("silent", 20, None, calls.clone()),
    ]);

    let message = chain
        .run(String::new(), &RegistrationAttempt::default())
        .await
        .unwrap();

    assert_eq!(message.as_deref(), Some("rejected"));
}

#[tokio::test]
async fn test_empty_chain_passes_initial_message_through() {
    let chain = ValidatorChain::new(vec![]);

    let attempt = RegistrationAttempt::default();
    assert_eq!(
        chain.run("existing".to_string(), &attempt).await.unwrap(),
        Some("existing".to_string())
    );
    assert_eq!(chain.run(String::new(), &attempt).await.unwrap(), None);
}

#[tokio::test]
async fn test_validator_error_propagates() {
    let chain = ValidatorChain::new(vec![Arc::new(FailingValidator) as Arc<dyn RegistrationValidator>]);

    assert!(chain
        .run(String::new(), &RegistrationAttempt::default())
        .await
        .is_err());
}

#[tokio::test]
async fn test_domain_guard_appends_to_upstream_rejection() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::new(MockWhitelistStore::with_domains(&["example.com"]));
    let chain = ValidatorChain::new(vec![
        StubValidator::new("username", 10, Some("Username taken."), calls.clone()),
        Arc::new(CheckEmailDomainUseCase::new(store)) as Arc<dyn RegistrationValidator>,
    ]);

    let attempt = RegistrationAttempt::from_email("user@unlisted.net");
    let message = chain.run(String::new(), &attempt).await.unwrap();

    assert_eq!(
        message.as_deref(),
        Some("Username taken.\nSorry, only email addresses from registered domains are allowed.")
    );
}
