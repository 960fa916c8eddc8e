//! Admin account database operations

use sqlx::PgPool;

use super::BoxError;

/// Admin account row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: i64,
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, BoxError> {
    let admin = sqlx::query_as::<_, Admin>(
        "SELECT id, email, password_hash, created_at FROM admins WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(admin)
}

pub async fn create(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    now: i64,
) -> Result<i64, BoxError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO admins (email, password_hash, created_at) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
