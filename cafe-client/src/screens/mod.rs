//! Screen controllers
//!
//! The engineering content of the seven admin screens and the public
//! pages, with rendering stripped away: a generic CRUD screen state
//! machine, the reservation board, and the public view reducers.

pub mod admin;
pub mod public;

pub use admin::{AdminScreen, ReservationScreen, RosterScreen, ScreenState};
pub use public::{Categorized, NewsletterForm, PublicView};
