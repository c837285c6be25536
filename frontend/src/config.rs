//! Application configuration.
//!
//! Centralized configuration for the landing page. Everything is fixed at
//! compile time; there is no runtime config file.

/// Practitioner display name.
pub const PRACTITIONER_NAME: &str = "Monica S";

/// Initials shown in the round header badge.
pub const PRACTITIONER_INITIALS: &str = "MS";

/// Qualification line under the name in the header and footer.
pub const QUALIFICATIONS: &str =
    "M.Sc Food Science, Nutrition & Dietetics — pursuing a Ph.D. in Nutrition and Dietetics";

/// Recipient of booking requests.
pub const CONTACT_EMAIL: &str = "dietitianmonica20@gmail.com";

/// Subject line of the generated email draft.
pub const MAIL_SUBJECT: &str = "Appointment request from website";

pub const INSTAGRAM_HANDLE: &str = "@dietitian_monica";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/dietitian_monica";

pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1200&auto=format&fit=crop&ixlib=rb-4.0.3";
pub const PORTRAIT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=800&auto=format&fit=crop&ixlib=rb-4.0.3";

/// How long the `pressed` class stays on a clicked link or button (ms).
pub const PRESS_FEEDBACK_MS: u32 = 140;

/// Maximum characters of a clicked element's label kept in the status line.
pub const CLICK_LABEL_MAX_CHARS: usize = 60;

/// Elements that receive click feedback and the dynamic button class.
pub const CLICKABLE_SELECTOR: &str = "a,button";

pub const DYNAMIC_BUTTON_CLASS: &str = "btn-dynamic";
pub const PRESSED_CLASS: &str = "pressed";

/// Duration of one hero marquee loop, as a CSS time.
pub const MARQUEE_SPEED: &str = "12s";

/// Console log level.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};
