//! Database access layer
//!
//! Plain async functions over `&PgPool`, one module per collection. The
//! full matching set is always fetched — pagination is a client concern.

pub mod admins;
pub mod contact_inquiries;
pub mod gallery_items;
pub mod menu_items;
pub mod newsletter;
pub mod plans;
pub mod reservations;
pub mod testimonials;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Build an ORDER BY clause from a caller-supplied column, validated
/// against the entity's whitelist. Anything not on the list falls back to
/// the default column, so no caller input ever reaches the SQL text.
pub(crate) fn order_sql(
    allowed: &[&str],
    requested: Option<&str>,
    ascending: bool,
    default: &str,
) -> String {
    let col = requested
        .filter(|c| allowed.contains(c))
        .unwrap_or(default);
    let dir = if ascending { "ASC" } else { "DESC" };
    format!("ORDER BY {col} {dir}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["created_at", "title"];

    #[test]
    fn whitelisted_column_used() {
        assert_eq!(
            order_sql(ALLOWED, Some("title"), true, "created_at"),
            "ORDER BY title ASC"
        );
    }

    #[test]
    fn unknown_column_falls_back() {
        assert_eq!(
            order_sql(ALLOWED, Some("id; DROP TABLE menu_items"), false, "created_at"),
            "ORDER BY created_at DESC"
        );
        assert_eq!(
            order_sql(ALLOWED, None, false, "created_at"),
            "ORDER BY created_at DESC"
        );
    }
}
