//! Gallery item model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Gallery image entity
///
/// `label` is the free-text category used by the public filter bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub label: String,
    pub image_url: String,
    pub created_at: i64,
}

/// Create gallery item payload
///
/// An image URL is required on creation; edits may keep the prior image.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GalleryItemCreate {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "label is required"))]
    pub label: String,
    #[validate(length(min = 1, message = "image is required"))]
    pub image_url: String,
}

/// Update gallery item payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryItemUpdate {
    pub title: Option<String>,
    pub label: Option<String>,
    pub image_url: Option<String>,
}
