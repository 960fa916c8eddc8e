//! Reservation model
//!
//! The one real state machine in the product: a reservation starts
//! `pending` and may move to `confirmed` or `cancelled`, never back.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Transition guard: only pending reservations move, and never back
    /// to pending.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed) | (Self::Pending, Self::Cancelled)
        )
    }
}

/// Occasion selected on the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    Casual,
    Birthday,
    DateNight,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Birthday => "birthday",
            Self::DateNight => "date_night",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "casual" => Some(Self::Casual),
            "birthday" => Some(Self::Birthday),
            "date_night" => Some(Self::DateNight),
            _ => None,
        }
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub passenger_name: String,
    pub contact_number: String,
    pub email: String,
    pub pax_count: i32,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub trip_type: TripType,
    pub status: ReservationStatus,
    pub created_at: i64,
}

/// Booking form payload; status is always forced to `pending` by the
/// backend, never supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 1, message = "passenger name is required"))]
    pub passenger_name: String,
    #[validate(length(min = 1, message = "contact number is required"))]
    pub contact_number: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(range(min = 1, max = 20, message = "pax must be 1-20"))]
    pub pax_count: i32,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub trip_type: TripType,
}

/// Admin status-change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_moves_forward_only() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
    }

    #[test]
    fn status_db_roundtrip() {
        for s in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(ReservationStatus::from_db(s.as_str()), Some(s));
        }
        assert_eq!(ReservationStatus::from_db("boarding"), None);
    }

    #[test]
    fn trip_type_serde_uses_snake_case() {
        let json = serde_json::to_string(&TripType::DateNight).unwrap();
        assert_eq!(json, "\"date_night\"");
    }
}
