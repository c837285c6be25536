//! UI components of the landing page, in page order:
//!
//! # Layout Components
//! - [`Header`] - Brand, navigation and mobile menu toggle
//! - [`Hero`] - Marquee headline, calls to action, featured plan
//! - [`Footer`] - Contact details, quick links, opening hours (`#contact`)
//!
//! # Content Sections
//! - [`ServiceCards`] - Service offers with hover detail (`#services`)
//! - [`About`] - Bio and credentials (`#about`)
//! - [`Testimonials`] - Patient quotes
//! - [`FaqSection`] - Single-open accordion (`#faq`)
//! - [`BookingSection`] - Appointment request form (`#book`)

mod header;
mod hero;
mod service_cards;
mod about;
mod testimonials;
mod faq;
mod booking;
mod footer;

pub use header::*;
pub use hero::*;
pub use service_cards::*;
pub use about::*;
pub use testimonials::*;
pub use faq::*;
pub use booking::*;
pub use footer::*;
