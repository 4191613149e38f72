use axum::{extract::State, response::Json, routing::post, Router};
use mailgate_domain::RegistrationAttempt;
use tracing::{debug, instrument};

use crate::{
    dto::{RegistrationCheckRequest, RegistrationCheckResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/registration/check", post(check_registration))
}

#[instrument(skip(state, req), name = "api_check_registration")]
async fn check_registration(
    State(state): State<AppState>,
    Json(req): Json<RegistrationCheckRequest>,
) -> Result<Json<RegistrationCheckResponse>, ApiError> {
    let attempt = RegistrationAttempt::new(req.fields);
    let message = state
        .registration_validators
        .run(req.message, &attempt)
        .await?;
    debug!(
        allowed = message.is_none(),
        "Registration attempt evaluated"
    );
    Ok(Json(RegistrationCheckResponse {
        allowed: message.is_none(),
        message,
    }))
}
