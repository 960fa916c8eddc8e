//! API routes for cafe-cloud

pub mod admin;
pub mod health;
pub mod public;
pub mod upload;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router, middleware};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::admin_auth_middleware;
use crate::state::AppState;

pub type ApiResult<T> = Result<Json<T>, AppError>;

pub(crate) fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Query error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Ordering query params accepted by every admin list endpoint
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub order_by: Option<String>,
    #[serde(default)]
    pub ascending: bool,
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Public site (no auth)
    let site = Router::new()
        .route("/api/menu", get(public::list_menu))
        .route("/api/menu/highlights", get(public::menu_highlights))
        .route("/api/gallery", get(public::list_gallery))
        .route("/api/testimonials", get(public::list_testimonials))
        .route("/api/plans", get(public::list_plans))
        .route("/api/reservations", post(public::create_reservation))
        .route("/api/contact", post(public::submit_contact))
        .route("/api/newsletter", post(public::subscribe_newsletter));

    // Admin console (JWT authenticated)
    let console = Router::new()
        .route("/me", get(admin::auth::me))
        .route("/menu", get(admin::menu::list).post(admin::menu::create))
        .route(
            "/menu/{id}",
            put(admin::menu::update).delete(admin::menu::remove),
        )
        .route(
            "/gallery",
            get(admin::gallery::list).post(admin::gallery::create),
        )
        .route(
            "/gallery/{id}",
            put(admin::gallery::update).delete(admin::gallery::remove),
        )
        .route(
            "/testimonials",
            get(admin::testimonials::list).post(admin::testimonials::create),
        )
        .route(
            "/testimonials/{id}",
            put(admin::testimonials::update).delete(admin::testimonials::remove),
        )
        .route("/contacts", get(admin::contacts::list))
        .route("/contacts/{id}", delete(admin::contacts::remove))
        .route("/reservations", get(admin::reservations::list))
        .route(
            "/reservations/{id}/status",
            post(admin::reservations::update_status),
        )
        .route("/newsletter", get(admin::newsletter::list))
        .route("/newsletter/{id}", delete(admin::newsletter::remove))
        .route("/plans", get(admin::plans::list).post(admin::plans::create))
        .route(
            "/plans/{id}",
            put(admin::plans::update).delete(admin::plans::remove),
        )
        .route("/uploads/{bucket}", post(upload::upload_asset))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        // registered after the layer, so login stays unauthenticated
        .route("/login", post(admin::auth::login));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/admin", console)
        .merge(site)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
