//! Admin authentication endpoints: login, session introspection

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use crate::api::{ApiResult, internal};
use crate::auth::AdminIdentity;
use crate::db;
use crate::state::AppState;
use crate::util::verify_password;

/// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    /// Unix timestamp (seconds) the token expires at
    pub expires_at: i64,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let email = req.email.trim().to_lowercase();
    let admin = db::admins::find_by_email(&state.pool, &email)
        .await
        .map_err(internal)?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&req.password, &admin.password_hash) {
        return Err(AppError::invalid_credentials());
    }

    let (token, expires_at) = crate::auth::create_token(admin.id, &admin.email, &state.jwt_secret)
        .map_err(|e| {
            tracing::error!("JWT creation failed: {e}");
            AppError::internal("Token creation failed")
        })?;

    Ok(Json(LoginResponse {
        token,
        email: admin.email,
        expires_at,
    }))
}

/// GET /api/admin/me — session introspection for the client's session gate
#[derive(Serialize)]
pub struct MeResponse {
    pub email: String,
    pub expires_at: i64,
}

pub async fn me(Extension(identity): Extension<AdminIdentity>) -> ApiResult<MeResponse> {
    Ok(Json(MeResponse {
        email: identity.email,
        expires_at: identity.expires_at,
    }))
}
