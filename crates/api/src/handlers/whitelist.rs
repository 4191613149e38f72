use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use mailgate_application::use_cases::WhitelistUpdateOutcome;
use tracing::{debug, instrument};

use crate::{
    dto::{SaveWhitelistRequest, SaveWhitelistResponse, WhitelistResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/whitelist", get(get_whitelist))
        .route("/whitelist", put(save_whitelist))
}

#[instrument(skip(state), name = "api_get_whitelist")]
async fn get_whitelist(
    State(state): State<AppState>,
) -> Result<Json<WhitelistResponse>, ApiError> {
    let whitelist = state.get_whitelist.execute().await?;
    debug!(count = whitelist.len(), "Whitelist retrieved successfully");
    Ok(Json(WhitelistResponse::from_whitelist(&whitelist)))
}

#[instrument(skip(state, req), name = "api_save_whitelist")]
async fn save_whitelist(
    State(state): State<AppState>,
    Json(req): Json<SaveWhitelistRequest>,
) -> Result<(StatusCode, Json<SaveWhitelistResponse>), ApiError> {
    match state.update_whitelist.execute(&req.whitelist).await? {
        WhitelistUpdateOutcome::Saved { whitelist } => {
            debug!(count = whitelist.len(), "Whitelist saved successfully");
            Ok((
                StatusCode::OK,
                Json(SaveWhitelistResponse::saved(&whitelist)),
            ))
        }
        WhitelistUpdateOutcome::Rejected { errors, submitted } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SaveWhitelistResponse::rejected(errors, submitted)),
        )),
    }
}
