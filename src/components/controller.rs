//! Copy controller.
//!
//! Owns one button instance per page view: anchor selection, mounting the
//! [`CopyButton`] component, the copy state machine, and re-insertion when
//! the host page swaps its navigation or content DOM on client-side route
//! changes.
//!
//! # Architecture
//!
//! - **One instance per page view**: the controller holds explicit element
//!   handles and tears the instance down when its anchor leaves the DOM
//! - **Mutation observer + popstate**: either can fire for a route change
//!   depending on how the host page navigates; both funnel into
//!   [`CopyController::ensure_button`], which is idempotent
//! - **Generation counter**: async copy outcomes that finish after their
//!   instance was torn down are discarded instead of mutating the new one

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::components::copy_button::{self, CopyButton};
use crate::config;
use crate::core::anchor::{self, Placement};
use crate::core::error::{CopyError, InsertError};
use crate::core::resolver;
use crate::models::ButtonState;
use crate::utils::{clipboard, diagnostics, dom, fetch};

// ============================================================================
// Entry Point
// ============================================================================

/// Installs the controller on the current page.
///
/// Inserts the button once the DOM is ready and wires the observers that
/// keep it alive across client-side navigation.
pub fn install() {
    let controller = CopyController::new();

    match dom::document() {
        Some(document) if document.ready_state() == "loading" => {
            controller.defer_until_dom_ready(&document);
        }
        _ => controller.init(),
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Handles for one mounted button instance.
struct MountedButton {
    /// Div the component is mounted into; owned by this controller.
    container: Element,
    /// Host element the container is attached to; owned by the page.
    anchor: Element,
    /// Unmounts the Leptos view when called.
    unmount: Option<Box<dyn FnOnce()>>,
}

impl MountedButton {
    fn dismantle(mut self) {
        if let Some(unmount) = self.unmount.take() {
            unmount();
        }
        self.container.remove();
    }
}

struct Inner {
    /// Shared with the component; the single source of truth for visuals.
    state: RwSignal<ButtonState>,
    /// The currently mounted instance, if any.
    mounted: RefCell<Option<MountedButton>>,
    /// Pending auto-reset; replacing or dropping the timeout cancels it.
    reset: RefCell<Option<Timeout>>,
    /// Bumped on every teardown; in-flight actions compare against it.
    generation: Cell<u32>,
}

/// Drives the copy button for one page.
///
/// Cheap to clone; clones share the same instance.
#[derive(Clone)]
pub struct CopyController {
    inner: Rc<Inner>,
}

impl CopyController {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RwSignal::new(ButtonState::Idle),
                mounted: RefCell::new(None),
                reset: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    fn init(&self) {
        self.ensure_button();

        #[cfg(target_arch = "wasm32")]
        {
            self.observe_mutations();
            self.listen_popstate();
        }
    }

    /// Makes sure exactly one healthy button instance exists.
    ///
    /// Idempotent and cheap when the current instance is still wired into
    /// the page; otherwise tears it down and re-runs the insertion policy.
    /// Safe to call from high-frequency observer callbacks.
    pub fn ensure_button(&self) {
        let still_wired = self
            .inner
            .mounted
            .borrow()
            .as_ref()
            .is_some_and(|mounted| {
                mounted.container.is_connected() && mounted.anchor.is_connected()
            });
        if still_wired {
            return;
        }

        self.teardown();

        // A button with our id that we did not mount means another copy of
        // the script is active; never double up.
        if dom::element_by_id(config::BUTTON_ID).is_some() {
            return;
        }

        if let Err(err) = self.insert() {
            match err {
                // No anchor is a legitimate page layout; stay dormant until
                // a later mutation provides one.
                InsertError::NoAnchor => {}
                other => diagnostics::insertion_failed(&other),
            }
        }
    }

    /// Runs one copy action for the current location: resolve, fetch,
    /// clipboard write.
    ///
    /// Clicks arriving while the button is not idle are dropped; the state
    /// machine re-arms itself via the scheduled reset.
    pub fn run_copy_action(&self) {
        if !self.inner.state.get_untracked().is_interactive() {
            return;
        }

        let path = dom::current_pathname().unwrap_or_default();
        let resolution = resolver::resolve(&path);
        if resolution.fallback {
            diagnostics::resolution_fallback(&path, &resolution);
        }

        let controller = self.clone();
        spawn_local(async move {
            controller.copy_from(&path, &resolution.url).await;
        });
    }

    /// Fetches `url` and places its text on the clipboard, walking the
    /// button through the copy state machine.
    pub async fn copy_from(&self, path: &str, url: &str) {
        self.copy_with(path, url, copy_document(url)).await;
    }

    /// Drives the copy state machine over an already-targeted `action`.
    ///
    /// The fetch and clipboard steps arrive as a future so the machine can
    /// be exercised against any document source.
    pub async fn copy_with<F>(&self, path: &str, url: &str, action: F)
    where
        F: Future<Output = Result<(), CopyError>>,
    {
        if !self.inner.state.get_untracked().is_interactive() {
            return;
        }

        // A reset scheduled by a previous action must not fire into this one.
        self.inner.reset.borrow_mut().take();
        self.inner.state.set(ButtonState::Loading);

        let generation = self.inner.generation.get();
        let outcome = action.await;

        // The page view this click belonged to may be gone by now.
        if self.inner.generation.get() != generation {
            return;
        }

        match outcome {
            Ok(()) => self.inner.state.set(ButtonState::Success),
            Err(err) => {
                diagnostics::copy_failure(path, url, &err);
                self.inner.state.set(ButtonState::Failure);
            }
        }
        self.schedule_reset();
    }

    /// Dismantles the current instance, if any, and invalidates in-flight
    /// actions and pending resets that belonged to it.
    fn teardown(&self) {
        let previous = self.inner.mounted.borrow_mut().take();
        if let Some(mounted) = previous {
            mounted.dismantle();
            self.inner.generation.set(self.inner.generation.get().wrapping_add(1));
            self.inner.reset.borrow_mut().take();
        }
    }

    fn insert(&self) -> Result<(), InsertError> {
        let document = dom::document().ok_or(InsertError::NoDocument)?;

        let Some((strategy, anchor)) = anchor::select_anchor(|selector| {
            document.query_selector(selector).ok().flatten()
        }) else {
            return Err(InsertError::NoAnchor);
        };

        let container = document
            .create_element("div")
            .map_err(|_| InsertError::AttachFailed("container creation".to_owned()))?;
        container.set_class_name(copy_button::container_class());

        match strategy.placement {
            Placement::AfterAnchor => {
                anchor
                    .insert_adjacent_element("afterend", &container)
                    .map_err(|_| {
                        InsertError::AttachFailed(format!("after {}", strategy.name))
                    })?;
            }
            Placement::AppendChild => {
                // The navigation bar styles direct children as nav entries.
                let _ = container.class_list().add_1(config::NAV_ITEM_CLASS);
                anchor.append_child(&container).map_err(|_| {
                    InsertError::AttachFailed(format!("into {}", strategy.name))
                })?;
            }
        }

        let state = self.inner.state;
        state.set(ButtonState::Idle);

        let controller = self.clone();
        let on_copy = UnsyncCallback::new(move |_: ()| controller.run_copy_action());

        let host: web_sys::HtmlElement = match container.clone().dyn_into() {
            Ok(host) => host,
            Err(_) => {
                container.remove();
                return Err(InsertError::AttachFailed("container cast".to_owned()));
            }
        };
        let handle = mount_to(host, move || view! { <CopyButton state=state on_copy=on_copy /> });

        *self.inner.mounted.borrow_mut() = Some(MountedButton {
            container,
            anchor,
            unmount: Some(Box::new(move || drop(handle))),
        });

        Ok(())
    }

    fn schedule_reset(&self) {
        let state = self.inner.state;
        let timeout = Timeout::new(config::RESET_DELAY_MS, move || {
            state.set(ButtonState::Idle);
        });
        *self.inner.reset.borrow_mut() = Some(timeout);
    }

    fn defer_until_dom_ready(&self, document: &web_sys::Document) {
        #[cfg(target_arch = "wasm32")]
        {
            let controller = self.clone();
            let closure = Closure::wrap(Box::new(move || controller.init()) as Box<dyn Fn()>);
            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = document;
    }

    #[cfg(target_arch = "wasm32")]
    fn observe_mutations(&self) {
        use web_sys::{MutationObserver, MutationObserverInit};

        let Some(document) = dom::document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let controller = self.clone();
        let closure = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
            let summaries = summarize_records(&records);
            if crate::core::mutation::should_reinsert(&summaries) {
                controller.ensure_button();
            }
        })
            as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let Ok(observer) = MutationObserver::new(closure.as_ref().unchecked_ref()) else {
            return;
        };
        closure.forget();

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        init.set_attributes(true);
        let filter = js_sys::Array::new();
        filter.push(&wasm_bindgen::JsValue::from_str("class"));
        init.set_attribute_filter(&filter);

        let _ = observer.observe_with_options(&body, &init);
    }

    #[cfg(target_arch = "wasm32")]
    fn listen_popstate(&self) {
        let Some(window) = dom::window() else {
            return;
        };

        let controller = self.clone();
        let closure = Closure::wrap(Box::new(move || {
            controller.ensure_button();
        }) as Box<dyn Fn()>);
        let _ =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());

        // Keep the closure alive for the lifetime of the page
        closure.forget();
    }
}

impl Default for CopyController {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Copy Action
// ============================================================================

/// Fetches the resolved document and places its text on the clipboard.
async fn copy_document(url: &str) -> Result<(), CopyError> {
    let text = fetch::fetch_text(url).await?;
    clipboard::write_text(&text).await?;
    Ok(())
}

// ============================================================================
// Mutation Summaries
// ============================================================================

/// Reduces raw observer records to the digests the predicate reads.
#[cfg(target_arch = "wasm32")]
fn summarize_records(records: &js_sys::Array) -> Vec<crate::core::mutation::MutationSummary> {
    use web_sys::{MutationRecord, Node};

    let main_content: Option<Node> = dom::main_content().map(Into::into);

    records
        .iter()
        .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
        .filter_map(|record| record.target())
        .map(|target| {
            let element = target.dyn_ref::<Element>();
            crate::core::mutation::MutationSummary {
                target_tag: element.map(Element::tag_name).unwrap_or_default(),
                target_classes: element.map(Element::class_name).unwrap_or_default(),
                encloses_main_content: target.contains(main_content.as_ref()),
            }
        })
        .collect()
}
