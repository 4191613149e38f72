use crate::handlers;
use crate::middleware::require_form_token;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::registration::routes())
        .merge(
            handlers::whitelist::routes().route_layer(axum::middleware::from_fn_with_state(
                state.clone(),
                require_form_token,
            )),
        )
        .with_state(state)
}
