//! Testimonial database operations

use shared::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str =
    "id, name, role, quote, rating, avatar_url, is_published, sort_order, created_at";

pub const ORDER_COLUMNS: &[&str] = &["created_at", "name", "rating", "sort_order"];

pub async fn list(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<Testimonial>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let items =
        sqlx::query_as::<_, Testimonial>(&format!("SELECT {COLUMNS} FROM testimonials {order}"))
            .fetch_all(pool)
            .await?;
    Ok(items)
}

/// Public view: published rows only, by sort order
pub async fn list_published(pool: &PgPool) -> Result<Vec<Testimonial>, BoxError> {
    let items = sqlx::query_as::<_, Testimonial>(&format!(
        "SELECT {COLUMNS} FROM testimonials WHERE is_published ORDER BY sort_order ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(
    pool: &PgPool,
    data: &TestimonialCreate,
    now: i64,
) -> Result<Testimonial, BoxError> {
    let item = sqlx::query_as::<_, Testimonial>(&format!(
        r#"
        INSERT INTO testimonials (name, role, quote, rating, avatar_url, is_published, sort_order, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&data.name)
    .bind(&data.role)
    .bind(&data.quote)
    .bind(data.rating)
    .bind(&data.avatar_url)
    .bind(data.is_published)
    .bind(data.sort_order)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

pub async fn update(pool: &PgPool, id: i64, data: &TestimonialUpdate) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE testimonials SET
            name = COALESCE($2, name),
            role = COALESCE($3, role),
            quote = COALESCE($4, quote),
            rating = COALESCE($5, rating),
            avatar_url = COALESCE($6, avatar_url),
            is_published = COALESCE($7, is_published),
            sort_order = COALESCE($8, sort_order)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.role)
    .bind(&data.quote)
    .bind(data.rating)
    .bind(&data.avatar_url)
    .bind(data.is_published)
    .bind(data.sort_order)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM testimonials WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
