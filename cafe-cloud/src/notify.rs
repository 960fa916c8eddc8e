//! Advisory webhook notifications
//!
//! After a booking is created, a booking status changes or a contact
//! message is stored, a denormalized summary is POSTed form-encoded to an
//! externally configured endpoint (e.g. a sheet/email bridge).
//!
//! The contract is strictly advisory: [`Notifier::send`] returns
//! immediately, the request runs on a detached task, failures are logged
//! and never surface to the mutating request. There is no retry, no queue
//! and no delivery guarantee; the primary record is already committed by
//! the time the notification fires.

use shared::models::{ContactInquiry, Reservation};

/// Fire-and-forget webhook notifier
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    endpoint: Option<String>,
}

/// Denormalized notification payloads
#[derive(Debug, Clone)]
pub enum NotifyEvent {
    /// A visitor submitted the booking form
    NewBooking(Reservation),
    /// An admin confirmed or cancelled a booking
    BookingStatus(Reservation),
    /// A visitor submitted the contact form
    ContactMessage(ContactInquiry),
}

impl NotifyEvent {
    /// The `action` discriminator field of the POST body
    pub fn action(&self) -> &'static str {
        match self {
            Self::NewBooking(_) => "new_booking",
            Self::BookingStatus(r) => r.status.as_str(),
            Self::ContactMessage(_) => "contact_message",
        }
    }

    /// Form-encoded body fields, `action` first
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("action", self.action().to_string())];
        match self {
            Self::NewBooking(r) | Self::BookingStatus(r) => {
                fields.push(("name", r.passenger_name.clone()));
                fields.push(("phone", r.contact_number.clone()));
                fields.push(("email", r.email.clone()));
                fields.push(("pax", r.pax_count.to_string()));
                fields.push(("date", r.departure_date.to_string()));
                fields.push(("time", r.departure_time.format("%H:%M").to_string()));
                fields.push(("tripType", r.trip_type.as_str().to_string()));
            }
            Self::ContactMessage(c) => {
                fields.push(("name", c.name.clone()));
                fields.push(("email", c.email.clone()));
                fields.push(("phone", c.phone.clone()));
                fields.push(("message", c.message.clone()));
            }
        }
        fields
    }
}

impl Notifier {
    pub fn new(endpoint: Option<String>) -> Self {
        if endpoint.is_none() {
            tracing::warn!("NOTIFY_WEBHOOK_URL not set; notifications disabled");
        }
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Dispatch an event on a detached task. Never blocks, never fails
    /// the caller; the response body is not inspected.
    pub fn send(&self, event: NotifyEvent) {
        let Some(endpoint) = self.endpoint.clone() else {
            return;
        };
        let client = self.client.clone();
        let action = event.action();
        let fields = event.form_fields();

        tokio::spawn(async move {
            match client.post(&endpoint).form(&fields).send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::debug!(action, "Notification delivered");
                }
                Ok(resp) => {
                    tracing::warn!(action, status = %resp.status(), "Notification rejected");
                }
                Err(e) => {
                    tracing::warn!(action, error = %e, "Notification failed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use shared::models::{ReservationStatus, TripType};

    fn booking(status: ReservationStatus) -> Reservation {
        Reservation {
            id: 7,
            passenger_name: "Rahul Sharma".into(),
            contact_number: "+91 98765 43210".into(),
            email: "rahul@gmail.com".into(),
            pax_count: 4,
            departure_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            departure_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            trip_type: TripType::Birthday,
            status,
            created_at: 0,
        }
    }

    #[test]
    fn new_booking_fields() {
        let fields = NotifyEvent::NewBooking(booking(ReservationStatus::Pending)).form_fields();
        assert_eq!(fields[0], ("action", "new_booking".to_string()));
        assert!(fields.contains(&("pax", "4".to_string())));
        assert!(fields.contains(&("date", "2026-03-14".to_string())));
        assert!(fields.contains(&("time", "19:30".to_string())));
        assert!(fields.contains(&("tripType", "birthday".to_string())));
    }

    #[test]
    fn status_event_uses_status_as_action() {
        let event = NotifyEvent::BookingStatus(booking(ReservationStatus::Confirmed));
        assert_eq!(event.action(), "confirmed");
        let event = NotifyEvent::BookingStatus(booking(ReservationStatus::Cancelled));
        assert_eq!(event.action(), "cancelled");
    }

    #[test]
    fn contact_fields_carry_message() {
        let event = NotifyEvent::ContactMessage(ContactInquiry {
            id: 1,
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            message: "Do you host layover parties?".into(),
            created_at: 0,
        });
        let fields = event.form_fields();
        assert_eq!(fields[0].1, "contact_message");
        assert!(fields.contains(&("message", "Do you host layover parties?".to_string())));
    }
}
