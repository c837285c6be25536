//! Common types used across the landing page.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Booking Types** - Form fields and the status line
//! - **Navigation Types** - In-page anchor targets
//! - **Content Types** - Static copy rendered by the sections
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Booking Types
// =============================================================================

/// One input of the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Date,
    Message,
}

impl FormField {
    /// Fields that must be non-empty before a request can be sent.
    pub const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Phone];

    /// Label used in the generated email body.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Date => "Date",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values typed into the appointment request form.
///
/// Everything is plain text; only presence of the required fields is checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD` from the date picker, or empty
    pub date: String,
    pub message: String,
}

impl BookingForm {
    /// Read one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Date => &self.date,
            FormField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Date => self.date = value,
            FormField::Message => self.message = value,
        }
    }

    /// Required fields that are empty. Whitespace counts as a value.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Check the required fields.
    pub fn validate(&self) -> Result<(), BookingError> {
        let fields = self.missing_required();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(BookingError::MissingRequired { fields })
        }
    }
}

/// Kind of the status line under the booking form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Neutral feedback (last click, chosen service)
    Info,
    /// Validation or navigation failure
    Error,
    /// Email draft handed to the mail client
    Success,
}

impl StatusKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Info => "text-gray-600",
            StatusKind::Error => "text-rose-600",
            StatusKind::Success => "text-emerald-700",
        }
    }
}

/// The single status message shown below the booking form.
///
/// Every user action replaces it; messages are never queued.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub text: String,
}

impl FormStatus {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }
}

// =============================================================================
// Navigation Types
// =============================================================================

/// In-page anchor that navigation buttons scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Services,
    About,
    Faq,
    Contact,
    Book,
}

impl Section {
    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::About => "about",
            Section::Faq => "faq",
            Section::Contact => "contact",
            Section::Book => "book",
        }
    }

    /// Text shown on navigation buttons.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Services => "Services",
            Section::About => "About",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
            Section::Book => "Book Appointment",
        }
    }
}

// =============================================================================
// Content Types
// =============================================================================

/// A service card with its hover popup text.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffer {
    pub title: &'static str,
    /// Short line shown on the card
    pub summary: &'static str,
    /// Longer text shown in the hover popup
    pub detail: &'static str,
}

/// Question and answer of the FAQ accordion.
#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Patient quote.
#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

// =============================================================================
// Error Types
// =============================================================================

/// Booking form rejected before any navigation happens.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BookingError {
    /// At least one of name, email or phone is empty.
    #[error("Please fill name, email and phone.")]
    MissingRequired { fields: Vec<FormField> },
}

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Booking form validation failed.
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// Expected DOM node or browser API was unavailable.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The browser refused the mailto navigation.
    #[error("Navigation error: {0}")]
    Navigation(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> BookingForm {
        BookingForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "+91 98450 00000".into(),
            date: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn test_set_replaces_single_field() {
        let mut form = filled();
        form.set(FormField::Date, "2026-11-02".into());

        assert_eq!(form.get(FormField::Date), "2026-11-02");
        assert_eq!(form.get(FormField::Name), "Asha");
    }

    #[test]
    fn test_validate_accepts_optional_fields_empty() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let mut form = filled();
        form.email.clear();
        form.phone.clear();

        let err = form.validate().unwrap_err();
        assert_eq!(
            err,
            BookingError::MissingRequired { fields: vec![FormField::Email, FormField::Phone] }
        );
        assert_eq!(err.to_string(), "Please fill name, email and phone.");
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled();
        form.name = " ".into();
        form.phone = "\t".into();

        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_empty_form_misses_all_required() {
        assert_eq!(BookingForm::default().missing_required(), FormField::REQUIRED.to_vec());
    }

    #[test]
    fn test_status_classes_differ_by_kind() {
        assert_eq!(FormStatus::success("ok").kind.css_class(), "text-emerald-700");
        assert_eq!(FormStatus::error("no").kind.css_class(), "text-rose-600");
        assert_eq!(FormStatus::info("hi").kind.css_class(), "text-gray-600");
    }

    #[test]
    fn test_booking_error_converts_into_app_error() {
        let err: AppError = BookingError::MissingRequired { fields: vec![FormField::Name] }.into();
        assert!(matches!(err, AppError::Booking(_)));
        assert_eq!(err.to_string(), "Please fill name, email and phone.");
    }

    #[test]
    fn test_status_serializes_lowercase_kind() {
        let json = serde_json::to_string(&FormStatus::info("Clicked: Book")).unwrap();
        assert_eq!(json, r#"{"kind":"info","text":"Clicked: Book"}"#);
    }
}
