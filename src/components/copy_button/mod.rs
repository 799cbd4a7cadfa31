//! Copy button component.
//!
//! Renders the injected button: a per-state icon and label over a shared
//! [`ButtonState`] signal. All transitions are owned by the controller; the
//! component only reflects state and reports clicks.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config;
use crate::models::ButtonState;

stylance::import_crate_style!(css, "src/components/copy_button/copy_button.module.css");

/// Class for the div the button is mounted into.
pub fn container_class() -> &'static str {
    css::container
}

/// The injected copy button.
///
/// # Props
/// - `state`: Shared button state, owned by the controller
/// - `on_copy`: Callback invoked on every click; the controller decides
///   whether the click starts an action
#[component]
pub fn CopyButton(state: RwSignal<ButtonState>, on_copy: UnsyncCallback<()>) -> impl IntoView {
    let state_class = move || match state.get() {
        ButtonState::Idle => css::idle,
        ButtonState::Loading => css::loading,
        ButtonState::Success => css::success,
        ButtonState::Failure => css::failure,
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        on_copy.run(());
    };

    view! {
        <button
            id=config::BUTTON_ID
            class=move || format!("{} {}", css::button, state_class())
            title=config::BUTTON_TOOLTIP
            disabled=move || !state.get().is_interactive()
            on:click=on_click
        >
            <span class=css::icon>
                {move || match state.get() {
                    ButtonState::Idle => view! { <Icon icon=ic::DOCUMENT /> }.into_any(),
                    ButtonState::Loading => view! { <Icon icon=ic::FETCHING /> }.into_any(),
                    ButtonState::Success => view! { <Icon icon=ic::COPIED /> }.into_any(),
                    ButtonState::Failure => view! { <Icon icon=ic::FAILED /> }.into_any(),
                }}
            </span>
            <span class=css::label>{move || state.get().label()}</span>
        </button>
    }
}
