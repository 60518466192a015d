use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use budgetwise_core::analytics::{CategoryBreakdown, Interval, SeriesPoint};
use budgetwise_core::errors::Error as CoreError;

use crate::{error::ApiResult, main_lib::AppState, models::SeriesQuery};

async fn get_series(
    Path(user_id): Path<String>,
    Query(query): Query<SeriesQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SeriesPoint>>> {
    let interval: Interval = query
        .required_interval()
        .and_then(str::parse)
        .map_err(CoreError::from)?;
    Ok(Json(state.analytics_service.get_series(&user_id, interval)?))
}

async fn get_category_breakdown(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CategoryBreakdown>> {
    Ok(Json(state.analytics_service.get_category_breakdown(&user_id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/{user_id}/series", get(get_series))
        .route("/analytics/{user_id}/categories", get(get_category_breakdown))
}
