//! Contact inquiry model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact inquiry entity
///
/// Append-only from the public site; admins may list and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContactInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: i64,
}

/// Contact form submission payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactInquiryCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}
