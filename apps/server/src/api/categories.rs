use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use budgetwise_core::categories::CategoryEntry;

use crate::{
    main_lib::AppState,
    models::{ClassifyQuery, ClassifyResponse},
};

async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryEntry>> {
    Json(state.registry.entries())
}

/// Classification is total: unknown names answer `other`, never an error.
async fn classify(
    Query(query): Query<ClassifyQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<ClassifyResponse> {
    let group = state.budget_service.classify(&query.name);
    Json(ClassifyResponse {
        registered: state.registry.is_registered(&query.name),
        category: query.name,
        group,
        budget_type: group.budget_type_label(),
        tracked: group.is_tracked(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/classify", get(classify))
}
