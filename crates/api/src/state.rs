use mailgate_application::services::ValidatorChain;
use mailgate_application::use_cases::{GetWhitelistUseCase, UpdateWhitelistUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_whitelist: Arc<GetWhitelistUseCase>,
    pub update_whitelist: Arc<UpdateWhitelistUseCase>,
    pub registration_validators: Arc<ValidatorChain>,
    pub form_token: Option<Arc<str>>,
}
