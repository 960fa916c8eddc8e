//! Event plan database operations
//!
//! A plan's feature rows are replaced wholesale on every save, inside the
//! same transaction as the plan row itself — a failed save can never
//! leave a plan stripped of its features.

use shared::models::{Plan, PlanFeature, PlanSave, PlanType, PlanWithFeatures};
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str =
    "id, plan_type, title, description, image_url, price, label, badge, created_at";

pub const ORDER_COLUMNS: &[&str] = &["created_at", "title", "price", "plan_type"];

#[derive(sqlx::FromRow)]
struct PlanRow {
    id: i64,
    plan_type: String,
    title: String,
    description: String,
    image_url: String,
    price: f64,
    label: String,
    badge: String,
    created_at: i64,
}

impl PlanRow {
    fn into_model(self) -> Result<Plan, BoxError> {
        let plan_type = PlanType::from_db(&self.plan_type)
            .ok_or_else(|| format!("invalid plan_type in db: {}", self.plan_type))?;
        Ok(Plan {
            id: self.id,
            plan_type,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            label: self.label,
            badge: self.badge,
            created_at: self.created_at,
        })
    }
}

/// Fetch plans with their features in two queries, grouped in memory
pub async fn list_with_features(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<PlanWithFeatures>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let rows = sqlx::query_as::<_, PlanRow>(&format!("SELECT {COLUMNS} FROM plans {order}"))
        .fetch_all(pool)
        .await?;

    let plan_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut features: Vec<PlanFeature> = if plan_ids.is_empty() {
        vec![]
    } else {
        sqlx::query_as::<_, PlanFeature>(
            "SELECT id, plan_id, feature FROM plan_features WHERE plan_id = ANY($1) ORDER BY id",
        )
        .bind(&plan_ids)
        .fetch_all(pool)
        .await?
    };

    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        let plan = row.into_model()?;
        let (own, rest): (Vec<_>, Vec<_>) =
            features.into_iter().partition(|f| f.plan_id == plan.id);
        features = rest;
        result.push(PlanWithFeatures {
            plan,
            features: own,
        });
    }
    Ok(result)
}

pub async fn find_with_features(
    pool: &PgPool,
    id: i64,
) -> Result<Option<PlanWithFeatures>, BoxError> {
    let row = sqlx::query_as::<_, PlanRow>(&format!("SELECT {COLUMNS} FROM plans WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let Some(row) = row else {
        return Ok(None);
    };
    let plan = row.into_model()?;
    let features = sqlx::query_as::<_, PlanFeature>(
        "SELECT id, plan_id, feature FROM plan_features WHERE plan_id = $1 ORDER BY id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;
    Ok(Some(PlanWithFeatures { plan, features }))
}

/// Create or update a plan and replace its feature set, atomically.
/// Returns the plan id, or `None` when updating an id that does not
/// exist. Feature rows get fresh ids on every save.
pub async fn save(
    pool: &PgPool,
    id: Option<i64>,
    data: &PlanSave,
    now: i64,
) -> Result<Option<i64>, BoxError> {
    let mut tx = pool.begin().await?;

    let plan_id = match id {
        None => {
            let (plan_id,): (i64,) = sqlx::query_as(
                r#"
                INSERT INTO plans (plan_type, title, description, image_url, price, label, badge, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id
                "#,
            )
            .bind(data.plan_type.as_str())
            .bind(&data.title)
            .bind(&data.description)
            .bind(&data.image_url)
            .bind(data.price)
            .bind(&data.label)
            .bind(&data.badge)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;
            plan_id
        }
        Some(plan_id) => {
            let result = sqlx::query(
                r#"
                UPDATE plans SET
                    plan_type = $2, title = $3, description = $4, image_url = $5,
                    price = $6, label = $7, badge = $8
                WHERE id = $1
                "#,
            )
            .bind(plan_id)
            .bind(data.plan_type.as_str())
            .bind(&data.title)
            .bind(&data.description)
            .bind(&data.image_url)
            .bind(data.price)
            .bind(&data.label)
            .bind(&data.badge)
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Ok(None);
            }
            plan_id
        }
    };

    // Replace features
    sqlx::query("DELETE FROM plan_features WHERE plan_id = $1")
        .bind(plan_id)
        .execute(&mut *tx)
        .await?;

    let clean = data.clean_features();
    if !clean.is_empty() {
        let plan_ids: Vec<i64> = clean.iter().map(|_| plan_id).collect();
        let texts: Vec<String> = clean.iter().map(|f| f.to_string()).collect();
        sqlx::query(
            r#"
            INSERT INTO plan_features (plan_id, feature)
            SELECT * FROM UNNEST($1::bigint[], $2::text[])
            "#,
        )
        .bind(&plan_ids)
        .bind(&texts)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(Some(plan_id))
}

/// Idempotent delete; features go with the plan via FK cascade
pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM plans WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
