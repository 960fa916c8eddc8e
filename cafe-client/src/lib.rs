//! cafe-client — application core for the Travel Café site and console
//!
//! Everything a UI shell embeds, with no rendering or routing attached:
//!
//! - [`CloudClient`]: the one shared handle to the hosted backend
//! - [`repository`]: per-entity CRUD stores behind narrow traits
//! - [`screens`]: the admin screen state machine and the public view
//!   reducers (category filter + progressive reveal)
//! - [`session`]: injectable session provider and the session gate
//!
//! Screens depend only on the traits, so tests (and previews) run against
//! in-memory fakes without a backend.

pub mod config;
pub mod error;
pub mod http;
pub mod repository;
pub mod screens;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::CloudClient;
