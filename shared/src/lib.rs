//! Shared types for the Travel Café platform
//!
//! Entity models, declared enumerations, validation payloads and the
//! unified error system used by both `cafe-cloud` (hosted backend) and
//! `cafe-client` (application core).

pub mod error;
pub mod models;
pub mod util;
