//! DOM tests, run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use dietitian_site::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Element {
    let document = gloo_utils::document();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(html);
    gloo_utils::body().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn test_dynamic_class_tags_links_and_buttons_only() {
    let container = fixture(r##"<a href="#">x</a><button>y</button><span>z</span>"##);

    apply_dynamic_class(&gloo_utils::document()).unwrap();

    for selector in ["a", "button"] {
        let el = container.query_selector(selector).unwrap().unwrap();
        assert!(el.class_list().contains(DYNAMIC_BUTTON_CLASS));
    }
    let span = container.query_selector("span").unwrap().unwrap();
    assert!(!span.class_list().contains(DYNAMIC_BUTTON_CLASS));

    container.remove();
}

#[wasm_bindgen_test]
async fn test_observer_tags_buttons_inserted_later() {
    let runtime = leptos::create_runtime();
    install_dynamic_button_class().unwrap();

    let container = fixture("<span>late</span>");
    let button = gloo_utils::document().create_element("button").unwrap();
    container.append_child(&button).unwrap();
    assert!(!button.class_list().contains(DYNAMIC_BUTTON_CLASS));

    TimeoutFuture::new(0).await;
    assert!(button.class_list().contains(DYNAMIC_BUTTON_CLASS));

    container.remove();
    runtime.dispose();
}

#[wasm_bindgen_test]
fn test_describe_clickable_without_text() {
    let container = fixture(r#"<button aria-label="Close menu"></button><button></button>"#);
    let buttons = container.query_selector_all("button").unwrap();

    let labelled: Element = buttons.item(0).unwrap().dyn_into().unwrap();
    let bare: Element = buttons.item(1).unwrap().dyn_into().unwrap();
    assert_eq!(describe_clickable(&labelled), "Close menu");
    assert_eq!(describe_clickable(&bare), "Action");

    container.remove();
}

#[wasm_bindgen_test]
async fn test_pressed_class_is_transient() {
    let container = fixture("<button>Book</button>");
    let button = container.query_selector("button").unwrap().unwrap();

    flash_pressed(&button).unwrap();
    assert!(button.class_list().contains(PRESSED_CLASS));

    TimeoutFuture::new(PRESS_FEEDBACK_MS + 100).await;
    assert!(!button.class_list().contains(PRESSED_CLASS));

    container.remove();
}

#[wasm_bindgen_test]
async fn test_mounted_page_has_anchors_and_styled_buttons() {
    leptos::mount_to_body(|| leptos::view! { <App/> });
    TimeoutFuture::new(50).await;

    let document = gloo_utils::document();
    for section in [Section::Services, Section::About, Section::Faq, Section::Contact, Section::Book] {
        assert!(document.get_element_by_id(section.id()).is_some(), "missing #{}", section.id());
    }

    // FAQ questions and the menu toggle carry no static btn-dynamic class
    let buttons = document.query_selector_all("#faq button, header button.p-2").unwrap();
    assert!(buttons.length() > 0);
    for i in 0..buttons.length() {
        let el: Element = buttons.item(i).unwrap().dyn_into().unwrap();
        assert!(el.class_list().contains(DYNAMIC_BUTTON_CLASS));
    }

    // submitting the empty form shows the validation message
    let submit: HtmlElement = document
        .query_selector("#book button[type=submit]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    submit.click();
    TimeoutFuture::new(20).await;

    let form_text = document.get_element_by_id("book").unwrap().text_content().unwrap_or_default();
    assert!(form_text.contains("Please fill name, email and phone."));
}
