//! Newsletter subscriber database operations

use shared::models::NewsletterSubscriber;
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str = "id, email, created_at";

pub const ORDER_COLUMNS: &[&str] = &["created_at", "email"];

pub async fn list(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<NewsletterSubscriber>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let items = sqlx::query_as::<_, NewsletterSubscriber>(&format!(
        "SELECT {COLUMNS} FROM newsletter_subscribers {order}"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Insert a subscriber; `None` means the email is already present.
/// The unique index does the conflict detection, so there is no window
/// between a check and the insert.
pub async fn insert(
    pool: &PgPool,
    email: &str,
    now: i64,
) -> Result<Option<NewsletterSubscriber>, BoxError> {
    let row = sqlx::query_as::<_, NewsletterSubscriber>(&format!(
        r#"
        INSERT INTO newsletter_subscribers (email, created_at)
        VALUES ($1, $2)
        ON CONFLICT (email) DO NOTHING
        RETURNING {COLUMNS}
        "#
    ))
    .bind(email)
    .bind(now)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM newsletter_subscribers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
