//! Event plan CRUD handlers
//!
//! Saving replaces the whole feature set atomically; the response carries
//! the freshly inserted feature rows so the console sees their new ids.

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::error::AppError;
use shared::models::{PlanSave, PlanWithFeatures};
use validator::Validate;

use crate::api::{ApiResult, ListQuery, internal};
use crate::db;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<PlanWithFeatures>> {
    let plans = db::plans::list_with_features(&state.pool, query.order_by.as_deref(), query.ascending)
        .await
        .map_err(internal)?;
    Ok(Json(plans))
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<PlanSave>,
) -> ApiResult<PlanWithFeatures> {
    data.validate().map_err(AppError::from)?;
    let plan_id = db::plans::save(&state.pool, None, &data, shared::util::now_millis())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::internal("Plan insert returned no id"))?;
    fetch_saved(&state, plan_id).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<PlanSave>,
) -> ApiResult<PlanWithFeatures> {
    data.validate().map_err(AppError::from)?;
    let plan_id = db::plans::save(&state.pool, Some(id), &data, shared::util::now_millis())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Plan"))?;
    fetch_saved(&state, plan_id).await
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    db::plans::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    Ok(Json(()))
}

async fn fetch_saved(state: &AppState, plan_id: i64) -> ApiResult<PlanWithFeatures> {
    let plan = db::plans::find_with_features(&state.pool, plan_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Plan"))?;
    Ok(Json(plan))
}
