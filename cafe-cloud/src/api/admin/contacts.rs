//! Contact inquiry handlers (list + delete; inquiries are created by the
//! public contact form only)

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::models::ContactInquiry;

use crate::api::{ApiResult, ListQuery, internal};
use crate::db;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<ContactInquiry>> {
    let items =
        db::contact_inquiries::list(&state.pool, query.order_by.as_deref(), query.ascending)
            .await
            .map_err(internal)?;
    Ok(Json(items))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    db::contact_inquiries::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    Ok(Json(()))
}
