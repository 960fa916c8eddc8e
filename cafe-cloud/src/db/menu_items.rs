//! Menu item database operations

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str = "id, title, description, price, time_estimate, category, \
                       image_url, is_veg, is_spicy, is_bestseller, created_at";

/// Columns admin list calls may order by
pub const ORDER_COLUMNS: &[&str] = &["created_at", "title", "category", "price"];

pub async fn list(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<MenuItem>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let items = sqlx::query_as::<_, MenuItem>(&format!("SELECT {COLUMNS} FROM menu_items {order}"))
        .fetch_all(pool)
        .await?;
    Ok(items)
}

/// Homepage highlights: the first `limit` items by default ordering
pub async fn highlights(pool: &PgPool, limit: i64) -> Result<Vec<MenuItem>, BoxError> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_items ORDER BY id ASC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn create(pool: &PgPool, data: &MenuItemCreate, now: i64) -> Result<MenuItem, BoxError> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        r#"
        INSERT INTO menu_items (
            title, description, price, time_estimate, category,
            image_url, is_veg, is_spicy, is_bestseller, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.time_estimate)
    .bind(&data.category)
    .bind(&data.image_url)
    .bind(data.is_veg)
    .bind(data.is_spicy)
    .bind(data.is_bestseller)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

/// Partial update; returns false when the id does not exist
pub async fn update(pool: &PgPool, id: i64, data: &MenuItemUpdate) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE menu_items SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            price = COALESCE($4, price),
            time_estimate = COALESCE($5, time_estimate),
            category = COALESCE($6, category),
            image_url = COALESCE($7, image_url),
            is_veg = COALESCE($8, is_veg),
            is_spicy = COALESCE($9, is_spicy),
            is_bestseller = COALESCE($10, is_bestseller)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.time_estimate)
    .bind(&data.category)
    .bind(&data.image_url)
    .bind(data.is_veg)
    .bind(data.is_spicy)
    .bind(data.is_bestseller)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Idempotent delete: removing an absent id is a success
pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
