//! Testimonial CRUD handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::error::AppError;
use shared::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use validator::Validate;

use crate::api::{ApiResult, ListQuery, internal};
use crate::db;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Testimonial>> {
    let items = db::testimonials::list(&state.pool, query.order_by.as_deref(), query.ascending)
        .await
        .map_err(internal)?;
    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<TestimonialCreate>,
) -> ApiResult<Testimonial> {
    data.validate().map_err(AppError::from)?;
    let item = db::testimonials::create(&state.pool, &data, shared::util::now_millis())
        .await
        .map_err(internal)?;
    Ok(Json(item))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<TestimonialUpdate>,
) -> ApiResult<()> {
    if let Some(rating) = data.rating
        && !(1..=5).contains(&rating)
    {
        return Err(AppError::validation("rating must be 1-5"));
    }
    let found = db::testimonials::update(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    if !found {
        return Err(AppError::not_found("Testimonial"));
    }
    Ok(Json(()))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    db::testimonials::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    Ok(Json(()))
}
