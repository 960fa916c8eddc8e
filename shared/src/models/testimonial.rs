//! Testimonial model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Testimonial entity
///
/// The public screen only sees rows with `is_published` set, ordered by
/// `sort_order`; the admin screen sees everything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub quote: String,
    /// 1-5 stars
    pub rating: i32,
    pub avatar_url: Option<String>,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: i64,
}

/// Create testimonial payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestimonialCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "quote is required"))]
    pub quote: String,
    #[validate(range(min = 1, max = 5, message = "rating must be 1-5"))]
    pub rating: i32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// Update testimonial payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub quote: Option<String>,
    pub rating: Option<i32>,
    pub avatar_url: Option<String>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn rating_out_of_range_rejected() {
        let payload = TestimonialCreate {
            name: "Asha".into(),
            role: "Frequent flyer".into(),
            quote: "Loved the window seat.".into(),
            rating: 6,
            avatar_url: None,
            is_published: true,
            sort_order: 0,
        };
        assert!(payload.validate().is_err());
    }
}
