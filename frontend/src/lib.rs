//! Dietitian practice landing page - Rust/Leptos Application
//!
//! A WebAssembly single page presenting the practice and collecting
//! appointment requests. There is no backend: the booking form opens a
//! prefilled email draft in the visitor's mail client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns PageState, installs click effects)       │
//! │  ├── Header (nav, mobile menu)                              │
//! │  ├── Hero                                                   │
//! │  ├── ServiceCards        #services                          │
//! │  ├── About               #about                             │
//! │  ├── Testimonials                                           │
//! │  ├── FaqSection          #faq                               │
//! │  ├── BookingSection      #book                              │
//! │  └── Footer              #contact                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (BookingForm, FormStatus, Section, errors)
//! - [`state`] - The page-level UI state bag
//! - [`components`] - UI sections
//! - [`services`] - Mailto handoff, scrolling, click feedback

use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Style, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod content;
pub mod types;
pub mod state;
pub mod styles;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Booking
    BookingForm, FormField, FormStatus, StatusKind,
    // Navigation
    Section,
    // Content
    FaqEntry, ServiceOffer, Testimonial,
    // Errors
    AppError, AppResult, BookingError,
};

// State
pub use state::PageState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic/console hooks and mount the app on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🥗 {} - Starting Leptos App", PRACTITIONER_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} | Dietitian & Nutritionist", PRACTITIONER_NAME)/>
        <Meta name="description" content=content::HERO_BLURB/>
        <Style>{styles::SITE_CSS}</Style>

        <Router>
            <main>
                <Routes>
                    // the page may be served below a sub-path
                    <Route path="/*any" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let state = PageState::new();

    // Runs before the view below is mounted; the feedback hooks catch up via
    // the mutation observer and a next-frame pass
    create_effect(move |_| {
        if let Err(e) = install_click_feedback(state) {
            log::error!("Click feedback unavailable: {}", e);
        }
        if let Err(e) = install_dynamic_button_class() {
            log::error!("Dynamic button styling unavailable: {}", e);
        }
    });

    view! {
        <div
            class="min-h-screen bg-gradient-to-b from-white via-emerald-50 to-emerald-100 text-gray-800"
            style="font-family: \"Times New Roman\", Times, serif"
        >
            <Header state=state/>
            <Hero/>
            <ServiceCards state=state/>
            <About/>
            <Testimonials/>
            <FaqSection state=state/>
            <BookingSection state=state/>
            <Footer/>
        </div>
    }
}
