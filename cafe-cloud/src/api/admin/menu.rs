//! Menu item CRUD handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::error::AppError;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use validator::Validate;

use crate::api::{ApiResult, ListQuery, internal};
use crate::db;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<MenuItem>> {
    let items = db::menu_items::list(&state.pool, query.order_by.as_deref(), query.ascending)
        .await
        .map_err(internal)?;
    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<MenuItemCreate>,
) -> ApiResult<MenuItem> {
    data.validate().map_err(AppError::from)?;
    let item = db::menu_items::create(&state.pool, &data, shared::util::now_millis())
        .await
        .map_err(internal)?;
    Ok(Json(item))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<MenuItemUpdate>,
) -> ApiResult<()> {
    let found = db::menu_items::update(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    if !found {
        return Err(AppError::not_found("Menu item"));
    }
    Ok(Json(()))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    db::menu_items::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    Ok(Json(()))
}
