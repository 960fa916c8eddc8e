//! Newsletter subscriber model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Newsletter subscriber entity
///
/// Email uniqueness is enforced by the backend; a duplicate insert
/// surfaces as a distinguished conflict error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct NewsletterSubscriber {
    pub id: i64,
    pub email: String,
    pub created_at: i64,
}

/// Subscribe payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn invalid_email_rejected() {
        let req = SubscribeRequest {
            email: "not-an-email".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_email_accepted() {
        let req = SubscribeRequest {
            email: "rahul@gmail.com".into(),
        };
        assert!(req.validate().is_ok());
    }
}
