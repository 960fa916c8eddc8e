//! Event plan model
//!
//! Plans carry an ordered list of feature strings. Saving a plan replaces
//! the entire feature set; feature rows have no stable identity across
//! edits and get fresh ids on every save.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event package kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Cake,
    Anniversary,
    Corporate,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cake => "cake",
            Self::Anniversary => "anniversary",
            Self::Corporate => "corporate",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "cake" => Some(Self::Cake),
            "anniversary" => Some(Self::Anniversary),
            "corporate" => Some(Self::Corporate),
            _ => None,
        }
    }
}

/// Event plan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub label: String,
    pub badge: String,
    pub created_at: i64,
}

/// A single feature row belonging to a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PlanFeature {
    pub id: i64,
    pub plan_id: i64,
    pub feature: String,
}

/// Plan with its feature rows, as both surfaces consume it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWithFeatures {
    #[serde(flatten)]
    pub plan: Plan,
    pub features: Vec<PlanFeature>,
}

/// Save payload for create and update alike
///
/// Updates are full-replace (including the feature set), not a diff;
/// empty feature strings are dropped before insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanSave {
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub price: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl PlanSave {
    /// Feature strings that actually get persisted
    pub fn clean_features(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_features_dropped() {
        let save = PlanSave {
            plan_type: PlanType::Cake,
            title: "Midnight Layover".into(),
            description: String::new(),
            image_url: String::new(),
            price: 1499.0,
            label: String::new(),
            badge: String::new(),
            features: vec!["A".into(), "  ".into(), String::new(), "B ".into()],
        };
        assert_eq!(save.clean_features(), vec!["A", "B"]);
    }

    #[test]
    fn plan_type_serializes_as_type_field() {
        let save = PlanSave {
            plan_type: PlanType::Corporate,
            title: "Boardroom".into(),
            description: String::new(),
            image_url: String::new(),
            price: 0.0,
            label: String::new(),
            badge: String::new(),
            features: vec![],
        };
        let json = serde_json::to_value(&save).unwrap();
        assert_eq!(json["type"], "corporate");
    }
}
