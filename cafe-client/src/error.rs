//! Client error types
//!
//! One typed enum instead of the duck-typed `{data, error}` pairs the
//! hosted-service SDK hands out — callers match exhaustively, and the
//! conflict case (duplicate newsletter email) stays distinguishable from
//! a generic failure.

use shared::error::{ErrorBody, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or session no longer valid
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness conflict (e.g. newsletter email already subscribed)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation failure, client-side or echoed by the backend
    #[error("Validation error: {0}")]
    Validation(String),

    /// Asset rejected: oversized or not an image
    #[error("Asset error: {0}")]
    Asset(String),

    /// Internal/unclassified backend error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ErrorBody> for ClientError {
    fn from(body: ErrorBody) -> Self {
        match body.code {
            ErrorCode::AlreadyExists => Self::Conflict(body.message),
            ErrorCode::NotFound => Self::NotFound(body.message),
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::RequiredField
            | ErrorCode::InvalidStatusTransition => Self::Validation(body.message),
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid
            | ErrorCode::SessionExpired => Self::Unauthorized,
            ErrorCode::AssetTooLarge | ErrorCode::AssetNotImage | ErrorCode::AssetUploadFailed => {
                Self::Asset(body.message)
            }
            ErrorCode::Unknown | ErrorCode::InternalError | ErrorCode::DatabaseError => {
                Self::Internal(body.message)
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_stays_distinguishable() {
        let body = ErrorBody {
            code: ErrorCode::AlreadyExists,
            message: "Email already subscribed".into(),
            details: None,
        };
        assert!(matches!(ClientError::from(body), ClientError::Conflict(_)));
    }

    #[test]
    fn asset_codes_map_to_asset() {
        for code in [ErrorCode::AssetTooLarge, ErrorCode::AssetNotImage] {
            let body = ErrorBody {
                code,
                message: "nope".into(),
                details: None,
            };
            assert!(matches!(ClientError::from(body), ClientError::Asset(_)));
        }
    }
}
