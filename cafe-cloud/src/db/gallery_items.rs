//! Gallery item database operations

use shared::models::{GalleryItem, GalleryItemCreate, GalleryItemUpdate};
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str = "id, title, label, image_url, created_at";

pub const ORDER_COLUMNS: &[&str] = &["created_at", "title", "label"];

pub async fn list(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<GalleryItem>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let items =
        sqlx::query_as::<_, GalleryItem>(&format!("SELECT {COLUMNS} FROM gallery_items {order}"))
            .fetch_all(pool)
            .await?;
    Ok(items)
}

pub async fn create(
    pool: &PgPool,
    data: &GalleryItemCreate,
    now: i64,
) -> Result<GalleryItem, BoxError> {
    let item = sqlx::query_as::<_, GalleryItem>(&format!(
        r#"
        INSERT INTO gallery_items (title, label, image_url, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&data.title)
    .bind(&data.label)
    .bind(&data.image_url)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

pub async fn update(pool: &PgPool, id: i64, data: &GalleryItemUpdate) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE gallery_items SET
            title = COALESCE($2, title),
            label = COALESCE($3, label),
            image_url = COALESCE($4, image_url)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.label)
    .bind(&data.image_url)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM gallery_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
