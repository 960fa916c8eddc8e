//! Entity models
//!
//! Each entity follows the `Entity` / `EntityCreate` / `EntityUpdate`
//! convention: the full row shape, the validated creation payload and the
//! partial update payload. Identifiers are always backend-assigned.

pub mod contact_inquiry;
pub mod gallery_item;
pub mod menu_item;
pub mod newsletter;
pub mod plan;
pub mod reservation;
pub mod testimonial;

pub use contact_inquiry::*;
pub use gallery_item::*;
pub use menu_item::*;
pub use newsletter::*;
pub use plan::*;
pub use reservation::*;
pub use testimonial::*;
