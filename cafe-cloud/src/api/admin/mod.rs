//! Admin console CRUD API handlers
//!
//! Every route in this module sits behind the admin JWT middleware.
//! List endpoints accept `order_by`/`ascending` query params validated
//! against each entity's column whitelist; deletes are idempotent.

pub mod auth;
pub mod contacts;
pub mod gallery;
pub mod menu;
pub mod newsletter;
pub mod plans;
pub mod reservations;
pub mod testimonials;
