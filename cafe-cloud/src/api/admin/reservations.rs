//! Reservation handlers: list + status transition
//!
//! The status machine: every booking starts `pending` and may move to
//! `confirmed` or `cancelled` exactly once. The guard runs against the
//! current row and again as a compare-and-set in the UPDATE, so two
//! admins racing on the same booking cannot both win.

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::error::{AppError, ErrorCode};
use shared::models::{Reservation, StatusChange};

use crate::api::{ApiResult, ListQuery, internal};
use crate::db;
use crate::notify::NotifyEvent;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Reservation>> {
    let items = db::reservations::list(&state.pool, query.order_by.as_deref(), query.ascending)
        .await
        .map_err(internal)?;
    Ok(Json(items))
}

/// POST /api/admin/reservations/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StatusChange>,
) -> ApiResult<Reservation> {
    let reservation = db::reservations::find(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::not_found("Reservation"))?;

    if !reservation.status.can_transition_to(req.status) {
        return Err(AppError::with_message(
            ErrorCode::InvalidStatusTransition,
            format!(
                "Cannot move a {} reservation to {}",
                reservation.status.as_str(),
                req.status.as_str()
            ),
        ));
    }

    let won = db::reservations::set_status(&state.pool, id, reservation.status, req.status)
        .await
        .map_err(internal)?;
    if !won {
        return Err(AppError::new(ErrorCode::InvalidStatusTransition));
    }

    let updated = Reservation {
        status: req.status,
        ..reservation
    };

    state
        .notifier
        .send(NotifyEvent::BookingStatus(updated.clone()));

    Ok(Json(updated))
}
