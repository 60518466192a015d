use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use budgetwise_core::users::{parse_salary, NewUser, User};

use crate::{
    error::ApiResult,
    extract::ApiJson,
    main_lib::AppState,
    models::{CreateUserRequest, ReloadResponse, SalaryResponse, UpdateSalaryRequest},
};

async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let new_user = NewUser::try_from(payload)?;
    let user = state.user_service.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.user_service.get_user(&id)?))
}

async fn get_salary(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SalaryResponse>> {
    let salary = state.user_service.get_salary(&id)?;
    Ok(Json(SalaryResponse { salary }))
}

async fn update_salary(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UpdateSalaryRequest>,
) -> ApiResult<Json<User>> {
    let salary = parse_salary(&payload.salary)?;
    Ok(Json(state.user_service.update_salary(&id, salary).await?))
}

async fn reload_salary_cycle(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ReloadResponse>> {
    let cycle_start = state.user_service.reload_salary_cycle(&id).await?;
    Ok(Json(ReloadResponse { cycle_start }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/salary", get(get_salary).put(update_salary))
        .route("/users/{id}/reload", post(reload_salary_cycle))
}
