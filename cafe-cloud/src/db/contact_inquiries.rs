//! Contact inquiry database operations

use shared::models::{ContactInquiry, ContactInquiryCreate};
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str = "id, name, email, phone, message, created_at";

pub const ORDER_COLUMNS: &[&str] = &["created_at", "name", "email"];

pub async fn list(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<ContactInquiry>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let items = sqlx::query_as::<_, ContactInquiry>(&format!(
        "SELECT {COLUMNS} FROM contact_inquiries {order}"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(
    pool: &PgPool,
    data: &ContactInquiryCreate,
    now: i64,
) -> Result<ContactInquiry, BoxError> {
    let item = sqlx::query_as::<_, ContactInquiry>(&format!(
        r#"
        INSERT INTO contact_inquiries (name, email, phone, message, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.message)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM contact_inquiries WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
