use mailgate_application::ports::WhitelistStore;
use mailgate_application::services::{RegistrationValidator, ValidatorChain};
use mailgate_application::use_cases::{
    CheckEmailDomainUseCase, GetWhitelistUseCase, UpdateWhitelistUseCase,
};
use std::sync::Arc;

use crate::di::Repositories;

pub struct UseCases {
    pub get_whitelist: Arc<GetWhitelistUseCase>,
    pub update_whitelist: Arc<UpdateWhitelistUseCase>,
    pub registration_validators: Arc<ValidatorChain>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let store: Arc<dyn WhitelistStore> = repos.whitelist_store.clone();
        let guard = Arc::new(CheckEmailDomainUseCase::new(store.clone()))
            as Arc<dyn RegistrationValidator>;

        Self {
            get_whitelist: Arc::new(GetWhitelistUseCase::new(store.clone())),
            update_whitelist: Arc::new(UpdateWhitelistUseCase::new(store)),
            registration_validators: Arc::new(ValidatorChain::new(vec![guard])),
        }
    }
}
