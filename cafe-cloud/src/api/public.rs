//! Public site endpoints
//!
//! Read paths return the full matching set — visitors' screens filter and
//! slice client-side. The three submit paths validate, write, and (for
//! bookings and contact messages) fire the advisory notification after
//! the row is committed.
//!
//! Handlers here lean on [`ServiceError`] for `?` propagation from the
//! db layer.

use axum::Json;
use axum::extract::State;
use shared::error::AppError;
use shared::models::{
    ContactInquiry, ContactInquiryCreate, GalleryItem, MenuItem, NewsletterSubscriber,
    PlanWithFeatures, Reservation, ReservationCreate, SubscribeRequest, Testimonial,
};
use validator::Validate;

use crate::db;
use crate::error::ServiceError;
use crate::notify::NotifyEvent;
use crate::state::AppState;

type PublicResult<T> = Result<Json<T>, ServiceError>;

/// Number of items the homepage highlights strip fetches
const HIGHLIGHT_COUNT: i64 = 3;

pub async fn list_menu(State(state): State<AppState>) -> PublicResult<Vec<MenuItem>> {
    let items = db::menu_items::list(&state.pool, Some("category"), true).await?;
    Ok(Json(items))
}

pub async fn menu_highlights(State(state): State<AppState>) -> PublicResult<Vec<MenuItem>> {
    let items = db::menu_items::highlights(&state.pool, HIGHLIGHT_COUNT).await?;
    Ok(Json(items))
}

pub async fn list_gallery(State(state): State<AppState>) -> PublicResult<Vec<GalleryItem>> {
    let items = db::gallery_items::list(&state.pool, Some("created_at"), false).await?;
    Ok(Json(items))
}

pub async fn list_testimonials(State(state): State<AppState>) -> PublicResult<Vec<Testimonial>> {
    let items = db::testimonials::list_published(&state.pool).await?;
    Ok(Json(items))
}

pub async fn list_plans(State(state): State<AppState>) -> PublicResult<Vec<PlanWithFeatures>> {
    let plans = db::plans::list_with_features(&state.pool, Some("price"), true).await?;
    Ok(Json(plans))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(data): Json<ReservationCreate>,
) -> PublicResult<Reservation> {
    data.validate().map_err(AppError::from)?;

    let reservation =
        db::reservations::create(&state.pool, &data, shared::util::now_millis()).await?;

    state
        .notifier
        .send(NotifyEvent::NewBooking(reservation.clone()));

    Ok(Json(reservation))
}

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(data): Json<ContactInquiryCreate>,
) -> PublicResult<ContactInquiry> {
    data.validate().map_err(AppError::from)?;

    let inquiry =
        db::contact_inquiries::create(&state.pool, &data, shared::util::now_millis()).await?;

    state
        .notifier
        .send(NotifyEvent::ContactMessage(inquiry.clone()));

    Ok(Json(inquiry))
}

pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(data): Json<SubscribeRequest>,
) -> PublicResult<NewsletterSubscriber> {
    data.validate().map_err(AppError::from)?;

    let email = data.email.trim().to_lowercase();
    let subscriber = db::newsletter::insert(&state.pool, &email, shared::util::now_millis())
        .await?
        .ok_or_else(|| AppError::conflict("Email already subscribed"))?;

    Ok(Json(subscriber))
}
