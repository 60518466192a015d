use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use budgetwise_core::expenses::{DateRange, ExpenseRecord, NewExpense};

use crate::{
    error::ApiResult,
    extract::ApiJson,
    main_lib::AppState,
    models::{AddExpenseResponse, HistoryQuery},
};

async fn add_expense(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewExpense>,
) -> ApiResult<(StatusCode, Json<AddExpenseResponse>)> {
    let accepted = state.budget_service.add_expense(payload).await?;
    Ok((StatusCode::CREATED, Json(AddExpenseResponse::from(accepted))))
}

async fn list_expenses(
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ExpenseRecord>>> {
    let range = match (query.from, query.to) {
        (None, None) => None,
        (from, to) => Some(DateRange::new(from, to)?),
    };
    Ok(Json(state.budget_service.list_expenses(&user_id, range)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", post(add_expense))
        .route("/expenses/{user_id}", get(list_expenses))
}
