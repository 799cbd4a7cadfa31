//! Browser-side tests for button insertion, fallback placement,
//! re-insertion after the host page swaps its chrome, and the copy state
//! machine driven against the test server.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

use vela_docs_copier::components::CopyController;
use vela_docs_copier::config;
use vela_docs_copier::core::error::{ClipboardError, CopyError};
use vela_docs_copier::utils::{fetch, js};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

fn set_page(html: &str) {
    document().body().expect("body").set_inner_html(html);
}

fn button_count() -> u32 {
    document()
        .query_selector_all(&format!("#{}", config::BUTTON_ID))
        .expect("selector")
        .length()
}

fn button() -> Element {
    document()
        .get_element_by_id(config::BUTTON_ID)
        .expect("button in page")
}

fn button_label() -> String {
    button().text_content().unwrap_or_default()
}

fn origin() -> String {
    web_sys::window()
        .expect("window")
        .location()
        .origin()
        .expect("origin")
}

/// Lets queued render effects run before the DOM is inspected.
async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
fn inserts_next_to_the_page_title() {
    set_page("<div class=\"navbar\"><div class=\"nav-links\"></div></div><main><h1>Page</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();

    assert_eq!(button_count(), 1);
    let h1 = document().query_selector("h1").unwrap().expect("h1");
    let container = h1.next_element_sibling().expect("container after title");
    assert!(
        container
            .query_selector(&format!("#{}", config::BUTTON_ID))
            .unwrap()
            .is_some()
    );
}

#[wasm_bindgen_test]
fn falls_back_to_navigation_links() {
    set_page("<div class=\"navbar\"><div class=\"nav-links\"></div></div><main><p>No title here</p></main>");

    let controller = CopyController::new();
    controller.ensure_button();

    assert_eq!(button_count(), 1);
    let nav = document()
        .query_selector(".navbar .nav-links")
        .unwrap()
        .expect("nav");
    let container = nav.first_element_child().expect("container in nav");
    assert!(container.class_list().contains(config::NAV_ITEM_CLASS));
    assert!(
        container
            .query_selector(&format!("#{}", config::BUTTON_ID))
            .unwrap()
            .is_some()
    );
}

#[wasm_bindgen_test]
fn insertion_is_idempotent() {
    set_page("<main><h1>Page</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();
    controller.ensure_button();
    controller.ensure_button();

    assert_eq!(button_count(), 1);
}

#[wasm_bindgen_test]
fn never_doubles_a_foreign_button() {
    set_page(&format!(
        "<div id=\"{}\"></div><main><h1>Page</h1></main>",
        config::BUTTON_ID
    ));

    let controller = CopyController::new();
    controller.ensure_button();

    assert_eq!(button_count(), 1);
}

#[wasm_bindgen_test]
fn stays_dormant_without_an_anchor() {
    set_page("<div class=\"sidebar\"><p>Nothing to attach to</p></div>");

    let controller = CopyController::new();
    controller.ensure_button();

    assert_eq!(button_count(), 0);

    // A later layout change provides the anchor and insertion catches up.
    set_page("<main><h1>Now present</h1></main>");
    controller.ensure_button();

    assert_eq!(button_count(), 1);
}

#[wasm_bindgen_test]
fn reinserts_after_the_page_chrome_is_replaced() {
    set_page("<main><h1>First view</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();
    assert_eq!(button_count(), 1);

    // Client-side navigation replaces the whole content subtree.
    set_page("<main><h1>Second view</h1></main>");
    controller.ensure_button();

    assert_eq!(button_count(), 1);
    let h1 = document().query_selector("h1").unwrap().expect("h1");
    let container = h1.next_element_sibling().expect("container after new title");
    assert!(
        container
            .query_selector(&format!("#{}", config::BUTTON_ID))
            .unwrap()
            .is_some()
    );
}

#[wasm_bindgen_test]
fn resolves_the_harness_path_to_the_mirror() {
    let path = vela_docs_copier::utils::dom::current_pathname().expect("pathname");
    let resolution = vela_docs_copier::core::resolver::resolve(&path);
    assert!(resolution.url.starts_with(config::MIRROR_BASE_URL));
}

#[wasm_bindgen_test]
fn button_starts_idle_and_labeled() {
    set_page("<main><h1>Page</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();

    let button = button();
    assert_eq!(
        button.get_attribute("title").as_deref(),
        Some(config::BUTTON_TOOLTIP)
    );
    assert!(!button.has_attribute("disabled"));
    let text = button.text_content().unwrap_or_default();
    assert!(text.contains(config::IDLE_LABEL), "label was {:?}", text);
}

#[wasm_bindgen_test]
async fn missing_document_fails_then_rearms() {
    set_page("<main><h1>Page</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();

    // The test server has no such file, so the fetch comes back 404.
    let url = format!("{}/no-such-document.md", origin());
    controller
        .copy_from("/vela/quickapp/no-such-document", &url)
        .await;
    settle().await;

    assert!(button().has_attribute("disabled"));
    assert!(
        button_label().contains(config::FAILURE_LABEL),
        "label was {:?}",
        button_label()
    );

    TimeoutFuture::new(config::RESET_DELAY_MS + 200).await;

    assert!(!button().has_attribute("disabled"));
    assert!(
        button_label().contains(config::IDLE_LABEL),
        "label was {:?}",
        button_label()
    );
}

#[wasm_bindgen_test]
async fn clicks_while_loading_are_dropped() {
    set_page("<main><h1>Page</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();

    let url = format!("{}/slow.md", origin());
    let in_flight = controller.clone();
    spawn_local(async move {
        in_flight
            .copy_with("/vela/quickapp/slow", &url, async {
                TimeoutFuture::new(300).await;
                Ok(())
            })
            .await;
    });
    TimeoutFuture::new(50).await;

    assert!(button().has_attribute("disabled"));
    assert!(button_label().contains(config::LOADING_LABEL));

    // A second click while the action is in flight must change nothing.
    controller.run_copy_action();
    settle().await;

    assert_eq!(button_count(), 1);
    assert!(button().has_attribute("disabled"));
    assert!(button_label().contains(config::LOADING_LABEL));

    TimeoutFuture::new(400).await;
    assert!(
        button_label().contains(config::SUCCESS_LABEL),
        "label was {:?}",
        button_label()
    );

    TimeoutFuture::new(config::RESET_DELAY_MS).await;
    assert!(!button().has_attribute("disabled"));
    assert!(button_label().contains(config::IDLE_LABEL));
}

#[wasm_bindgen_test]
async fn clipboard_rejection_fails_the_action() {
    set_page("<main><h1>Page</h1></main>");

    let controller = CopyController::new();
    controller.ensure_button();

    // The harness page itself fetches fine; delivery is what fails.
    let url = format!("{}/", origin());
    controller
        .copy_with("/vela/quickapp/", &url, async {
            let _body = fetch::fetch_text(&url).await?;
            Err(CopyError::from(ClipboardError::WriteRejected(
                "write denied".to_owned(),
            )))
        })
        .await;
    settle().await;

    assert!(button().has_attribute("disabled"));
    assert!(
        button_label().contains(config::FAILURE_LABEL),
        "label was {:?}",
        button_label()
    );
}

#[wasm_bindgen_test]
fn js_error_messages_are_extracted() {
    let err: JsValue = js_sys::Error::new("connection reset").into();
    assert_eq!(js::error_message(&err), "connection reset");
    assert_eq!(
        js::error_message(&JsValue::from_str("plain rejection")),
        "plain rejection"
    );
}
