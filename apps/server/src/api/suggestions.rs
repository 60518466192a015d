use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use budgetwise_core::suggestions::Suggestion;

use crate::{
    error::ApiResult,
    extract::ApiJson,
    main_lib::AppState,
    models::{GenerateSuggestionRequest, SuggestionsResponse},
};

async fn generate_suggestion(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<GenerateSuggestionRequest>,
) -> ApiResult<(StatusCode, Json<Suggestion>)> {
    let suggestion = state.suggestion_service.generate(&payload.user_id).await?;
    Ok((StatusCode::CREATED, Json(suggestion)))
}

async fn list_suggestions(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SuggestionsResponse>> {
    let suggestions = state.suggestion_service.list(&user_id)?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/suggestions", post(generate_suggestion))
        .route("/suggestions/{user_id}", get(list_suggestions))
}
