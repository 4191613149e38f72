#![allow(dead_code)]

use async_trait::async_trait;
use mailgate_application::ports::WhitelistStore;
use mailgate_domain::{DomainError, Whitelist};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub struct MockWhitelistStore {
    whitelist: RwLock<Whitelist>,
    set_calls: AtomicU64,
    should_fail: RwLock<bool>,
}

impl MockWhitelistStore {
    pub fn new() -> Self {
        Self {
            whitelist: RwLock::new(Whitelist::default()),
            set_calls: AtomicU64::new(0),
            should_fail: RwLock::new(false),
        }
    }

    pub fn with_domains(domains: &[&str]) -> Self {
        Self {
            whitelist: RwLock::new(Whitelist::new(
                domains.iter().map(|d| d.to_string()).collect(),
            )),
            set_calls: AtomicU64::new(0),
            should_fail: RwLock::new(false),
        }
    }

    pub fn set_calls(&self) -> u64 {
        self.set_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn stored(&self) -> Whitelist {
        self.whitelist.read().await.clone()
    }
}

#[async_trait]
impl WhitelistStore for MockWhitelistStore {
    async fn get(&self) -> Result<Whitelist, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(self.whitelist.read().await.clone())
    }

    async fn set(&self, whitelist: &Whitelist) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        self.set_calls.fetch_add(1, Ordering::Relaxed);
        *self.whitelist.write().await = whitelist.clone();
        Ok(())
    }
}
