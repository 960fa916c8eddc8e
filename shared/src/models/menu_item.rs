//! Menu item model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu item entity
///
/// `category` is free text; the set of categories visible anywhere is the
/// set of distinct values present in the live data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Preparation time shown on the card, e.g. "15 mins"
    pub time_estimate: String,
    pub category: String,
    pub image_url: String,
    pub is_veg: bool,
    pub is_spicy: bool,
    pub is_bestseller: bool,
    /// Creation timestamp (ms since epoch)
    pub created_at: i64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub time_estimate: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub is_bestseller: bool,
}

/// Update menu item payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub time_estimate: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_veg: Option<bool>,
    pub is_spicy: Option<bool>,
    pub is_bestseller: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn empty_title_rejected() {
        let payload = MenuItemCreate {
            title: String::new(),
            description: String::new(),
            price: 395.0,
            time_estimate: "15 mins".into(),
            category: "Starters".into(),
            image_url: String::new(),
            is_veg: false,
            is_spicy: true,
            is_bestseller: true,
        };
        assert!(payload.validate().is_err());
    }
}
