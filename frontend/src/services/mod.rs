//! Browser-side services used by the page sections.
//!
//! # Services
//!
//! - [`mailto`] - Booking form validation and `mailto:` handoff
//! - [`scroll`] - Smooth scrolling to in-page anchors
//! - [`feedback`] - Global click feedback and dynamic button styling

pub mod mailto;
pub mod scroll;
pub mod feedback;

pub use mailto::*;
pub use scroll::*;
pub use feedback::*;
