//! Newsletter subscriber handlers (list + delete; subscriptions come in
//! through the public form)

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::models::NewsletterSubscriber;

use crate::api::{ApiResult, ListQuery, internal};
use crate::db;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<NewsletterSubscriber>> {
    let items = db::newsletter::list(&state.pool, query.order_by.as_deref(), query.ascending)
        .await
        .map_err(internal)?;
    Ok(Json(items))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    db::newsletter::delete(&state.pool, id)
        .await
        .map_err(internal)?;
    Ok(Json(()))
}
