//! Cosmetic click feedback for links and buttons.
//!
//! Two document-wide hooks, both purely visual:
//!
//! - a delegated `click` listener that flashes the `pressed` class on the
//!   nearest link/button and records what was clicked in the status line
//! - a `MutationObserver` that keeps the `btn-dynamic` class on every link
//!   and button, including ones inserted after mount
//!
//! Both are removed again when the owning component is cleaned up.

use gloo_timers::callback::Timeout;
use leptos::{on_cleanup, request_animation_frame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MutationObserver, MutationObserverInit};

use crate::config::{
    CLICKABLE_SELECTOR, CLICK_LABEL_MAX_CHARS, DYNAMIC_BUTTON_CLASS, PRESSED_CLASS,
    PRESS_FEEDBACK_MS,
};
use crate::state::PageState;
use crate::types::{AppError, AppResult, FormStatus};

fn dom_err(e: JsValue) -> AppError {
    AppError::Dom(format!("{:?}", e))
}

/// Pick the first non-blank candidate, trimmed and cut to
/// [`CLICK_LABEL_MAX_CHARS`] characters. Falls back to `"Action"`.
pub fn click_label(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .unwrap_or("Action")
        .chars()
        .take(CLICK_LABEL_MAX_CHARS)
        .collect()
}

/// Human-readable name of a clicked element: inner text, then
/// `aria-label`, then `title`.
pub fn describe_clickable(element: &Element) -> String {
    let inner = element.dyn_ref::<HtmlElement>().map(|el| el.inner_text());
    let aria = element.get_attribute("aria-label");
    let title = element.get_attribute("title");
    click_label(&[inner.as_deref(), aria.as_deref(), title.as_deref()])
}

/// Nearest link or button enclosing the event target, if any.
fn clickable_target(event: &MouseEvent) -> AppResult<Option<Element>> {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(None);
    };
    element.closest(CLICKABLE_SELECTOR).map_err(dom_err)
}

/// Add the `pressed` class and drop it again after [`PRESS_FEEDBACK_MS`].
pub fn flash_pressed(element: &Element) -> AppResult<()> {
    element.class_list().add_1(PRESSED_CLASS).map_err(dom_err)?;

    let element = element.clone();
    Timeout::new(PRESS_FEEDBACK_MS, move || {
        let _ = element.class_list().remove_1(PRESSED_CLASS);
    })
    .forget();
    Ok(())
}

fn on_document_click(state: PageState, event: MouseEvent) {
    match clickable_target(&event) {
        Ok(Some(element)) => {
            if let Err(e) = flash_pressed(&element) {
                log::warn!("Pressed feedback skipped: {}", e);
            }
            let label = describe_clickable(&element);
            state.set_status(FormStatus::info(format!("Clicked: {}", label)));
        }
        Ok(None) => {}
        Err(e) => log::warn!("Click feedback skipped: {}", e),
    }
}

/// Listen for clicks anywhere in the document.
///
/// Must run inside a reactive owner; the listener is removed on cleanup.
pub fn install_click_feedback(state: PageState) -> AppResult<()> {
    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        on_document_click(state, event);
    });

    gloo_utils::document()
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    log::debug!("Click feedback installed");

    on_cleanup(move || {
        let _ = gloo_utils::document()
            .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        log::debug!("Click feedback removed");
    });
    Ok(())
}

/// Tag every current link and button with the dynamic button class.
///
/// Returns how many elements were visited.
pub fn apply_dynamic_class(document: &Document) -> AppResult<u32> {
    let nodes = document.query_selector_all(CLICKABLE_SELECTOR).map_err(dom_err)?;

    let mut tagged = 0;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            element.class_list().add_1(DYNAMIC_BUTTON_CLASS).map_err(dom_err)?;
            tagged += 1;
        }
    }
    Ok(tagged)
}

/// Apply the dynamic button class now, on the next frame, and after every
/// structural change under `<body>`.
///
/// Only `childList` mutations are observed, so adding the class does not
/// retrigger the observer. Must run inside a reactive owner; the observer is
/// disconnected on cleanup.
pub fn install_dynamic_button_class() -> AppResult<()> {
    let document = gloo_utils::document();
    let tagged = apply_dynamic_class(&document)?;
    log::debug!("Dynamic button class applied to {} elements", tagged);

    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |_records: js_sys::Array, _observer: MutationObserver| {
            if let Err(e) = apply_dynamic_class(&gloo_utils::document()) {
                log::warn!("Dynamic button class skipped: {}", e);
            }
        },
    );

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(dom_err)?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(&gloo_utils::body(), &options)
        .map_err(dom_err)?;

    // nodes mounted by the caller in this same tick
    request_animation_frame(|| {
        if let Err(e) = apply_dynamic_class(&gloo_utils::document()) {
            log::warn!("Dynamic button class skipped: {}", e);
        }
    });

    on_cleanup(move || {
        observer.disconnect();
        drop(callback);
        log::debug!("Dynamic button observer disconnected");
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inner_text_wins() {
        assert_eq!(click_label(&[Some(" Book "), Some("aria"), Some("title")]), "Book");
    }

    #[test]
    fn test_falls_back_through_attributes() {
        assert_eq!(click_label(&[Some("  "), None, Some("Open menu")]), "Open menu");
        assert_eq!(click_label(&[None, Some("Close"), None]), "Close");
    }

    #[test]
    fn test_blank_inner_text_uses_aria_label() {
        // icon-only buttons render whitespace as inner text
        assert_eq!(click_label(&[Some(" \n "), Some(" Close menu "), None]), "Close menu");
        assert_eq!(click_label(&[Some("\t"), None, None]), "Action");
    }

    #[test]
    fn test_defaults_to_action() {
        assert_eq!(click_label(&[None, None, None]), "Action");
        assert_eq!(click_label(&[]), "Action");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let long = "é".repeat(CLICK_LABEL_MAX_CHARS + 10);
        let label = click_label(&[Some(&long)]);
        assert_eq!(label.chars().count(), CLICK_LABEL_MAX_CHARS);
    }
}
