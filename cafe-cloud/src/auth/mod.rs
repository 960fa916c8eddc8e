//! Admin JWT authentication

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use crate::state::AppState;

/// JWT claims for admin authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin ID
    pub sub: String,
    /// Admin email
    pub email: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated admin identity extracted from JWT
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub admin_id: i64,
    pub email: String,
    /// Expiration (Unix timestamp seconds), echoed to the client so it can
    /// drop the session the moment the token lapses
    pub expires_at: i64,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a JWT token for an admin; returns the token and its expiry
/// (Unix timestamp seconds).
pub fn create_token(
    admin_id: i64,
    email: &str,
    secret: &str,
) -> Result<(String, i64), jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let exp = (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp();
    let claims = AdminClaims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        exp: exp as usize,
        iat: now.timestamp() as usize,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok((token, exp))
}

/// Middleware that extracts and verifies the admin JWT from the
/// Authorization header
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized().into_response())?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized().into_response())?;

    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::new(shared::error::ErrorCode::TokenInvalid).into_response()
    })?;

    let admin_id = token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::new(shared::error::ErrorCode::TokenInvalid).into_response())?;

    let identity = AdminIdentity {
        admin_id,
        email: token_data.claims.email,
        expires_at: token_data.claims.exp as i64,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrips_through_decode() {
        let (token, exp) = create_token(42, "pilot@365travelcafe.in", "test-secret").unwrap();
        assert!(exp > chrono::Utc::now().timestamp());

        let data = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.sub, "42");
        assert_eq!(data.claims.email, "pilot@365travelcafe.in");
    }

    #[test]
    fn wrong_secret_rejected() {
        let (token, _) = create_token(1, "a@b.c", "secret-one").unwrap();
        let result = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret(b"secret-two"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
