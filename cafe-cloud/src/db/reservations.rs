//! Reservation database operations

use chrono::{NaiveDate, NaiveTime};
use shared::models::{Reservation, ReservationCreate, ReservationStatus, TripType};
use sqlx::PgPool;

use super::BoxError;

const COLUMNS: &str = "id, passenger_name, contact_number, email, pax_count, \
                       departure_date, departure_time, trip_type, status, created_at";

pub const ORDER_COLUMNS: &[&str] = &["created_at", "departure_date", "passenger_name", "status"];

/// Raw row; `trip_type`/`status` are TEXT in the schema and parsed into
/// the declared enums on the way out.
#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    passenger_name: String,
    contact_number: String,
    email: String,
    pax_count: i32,
    departure_date: NaiveDate,
    departure_time: NaiveTime,
    trip_type: String,
    status: String,
    created_at: i64,
}

impl ReservationRow {
    fn into_model(self) -> Result<Reservation, BoxError> {
        let trip_type = TripType::from_db(&self.trip_type)
            .ok_or_else(|| format!("invalid trip_type in db: {}", self.trip_type))?;
        let status = ReservationStatus::from_db(&self.status)
            .ok_or_else(|| format!("invalid status in db: {}", self.status))?;
        Ok(Reservation {
            id: self.id,
            passenger_name: self.passenger_name,
            contact_number: self.contact_number,
            email: self.email,
            pax_count: self.pax_count,
            departure_date: self.departure_date,
            departure_time: self.departure_time,
            trip_type,
            status,
            created_at: self.created_at,
        })
    }
}

pub async fn list(
    pool: &PgPool,
    order_by: Option<&str>,
    ascending: bool,
) -> Result<Vec<Reservation>, BoxError> {
    let order = super::order_sql(ORDER_COLUMNS, order_by, ascending, "created_at");
    let rows =
        sqlx::query_as::<_, ReservationRow>(&format!("SELECT {COLUMNS} FROM reservations {order}"))
            .fetch_all(pool)
            .await?;
    rows.into_iter().map(ReservationRow::into_model).collect()
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Reservation>, BoxError> {
    let row =
        sqlx::query_as::<_, ReservationRow>(&format!("SELECT {COLUMNS} FROM reservations WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    row.map(ReservationRow::into_model).transpose()
}

/// Insert a booking; status always starts `pending` regardless of caller.
pub async fn create(
    pool: &PgPool,
    data: &ReservationCreate,
    now: i64,
) -> Result<Reservation, BoxError> {
    let row = sqlx::query_as::<_, ReservationRow>(&format!(
        r#"
        INSERT INTO reservations (
            passenger_name, contact_number, email, pax_count,
            departure_date, departure_time, trip_type, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&data.passenger_name)
    .bind(&data.contact_number)
    .bind(&data.email)
    .bind(data.pax_count)
    .bind(data.departure_date)
    .bind(data.departure_time)
    .bind(data.trip_type.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;
    row.into_model()
}

/// Compare-and-set status change. Returns false when the row no longer
/// holds `from` (someone else got there first) or does not exist.
pub async fn set_status(
    pool: &PgPool,
    id: i64,
    from: ReservationStatus,
    to: ReservationStatus,
) -> Result<bool, BoxError> {
    let result = sqlx::query("UPDATE reservations SET status = $3 WHERE id = $1 AND status = $2")
        .bind(id)
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
