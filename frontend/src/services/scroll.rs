//! Smooth scrolling to in-page anchors.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::types::{AppError, AppResult, Section};

/// Smooth-scroll the section element into view.
pub fn scroll_to(section: Section) -> AppResult<()> {
    let element = gloo_utils::document()
        .get_element_by_id(section.id())
        .ok_or_else(|| AppError::Dom(format!("no element with id '{}'", section.id())))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    log::debug!("Scrolled to #{}", section.id());
    Ok(())
}

/// Event-handler flavour of [`scroll_to`]: failures are logged, not raised.
pub fn go_to(section: Section) {
    if let Err(e) = scroll_to(section) {
        log::warn!("Scroll skipped: {}", e);
    }
}
