//! Page-level UI state.
//!
//! All state lives in one [`PageState`] created by the page shell and passed
//! down to the sections as a prop. Nothing outlives the page view.

use leptos::*;

use crate::types::{BookingForm, FormField, FormStatus};

/// Reactive state shared by the page sections.
#[derive(Clone, Copy)]
pub struct PageState {
    pub form: RwSignal<BookingForm>,
    /// At most one message; each action replaces it
    pub status: RwSignal<Option<FormStatus>>,
    pub menu_open: RwSignal<bool>,
    pub open_faq: RwSignal<Option<usize>>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            form: create_rw_signal(BookingForm::default()),
            status: create_rw_signal(None),
            menu_open: create_rw_signal(false),
            open_faq: create_rw_signal(None),
        }
    }

    pub fn set_status(&self, status: FormStatus) {
        self.status.set(Some(status));
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.form.update(|form| form.set(field, value));
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
        log::debug!("Mobile menu open: {}", self.menu_open.get_untracked());
    }

    pub fn toggle_faq(&self, index: usize) {
        self.open_faq.update(|open| *open = toggle_faq(*open, index));
        log::debug!("FAQ expanded: {:?}", self.open_faq.get_untracked());
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Accordion transition: clicking the open entry collapses it, any other
/// entry becomes the only open one.
pub fn toggle_faq(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Text of the mobile menu toggle button.
pub fn menu_toggle_label(open: bool) -> &'static str {
    if open {
        "Close"
    } else {
        "Menu"
    }
}
