use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState, models::SnapshotView};

async fn get_snapshot(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SnapshotView>> {
    let snapshot = state.budget_service.get_snapshot(&user_id)?;
    Ok(Json(SnapshotView::from(&snapshot)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budget/{user_id}/snapshot", get(get_snapshot))
}
