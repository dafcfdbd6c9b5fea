//! Terminal view component.
//!
//! The read-only display surface sits above the input surface; the line
//! being edited is drawn after the input surface's output.

use folio_core::KeyEvent;
use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::terminal::{KeyAction, Output, map_key};
use crate::services::read_clipboard;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Keyboard
// ============================================================================

fn handle_keydown(ctx: AppContext, ev: web_sys::KeyboardEvent) {
    let Some(action) = map_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
        return;
    };
    ev.prevent_default();

    match action {
        KeyAction::Edit(event) => ctx.handle_key(event),
        KeyAction::Paste => spawn_local(async move {
            match read_clipboard().await {
                Ok(text) => ctx.handle_key(KeyEvent::Paste(text)),
                Err(error) => tracing::warn!(%error, "paste failed"),
            }
        }),
    }
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = ctx.terminal;
    let bottom_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| ctx.boot());

    let listener = window_event_listener(ev::keydown, move |ev| handle_keydown(ctx, ev));
    on_cleanup(move || listener.remove());

    // Keep the caret line in view as output grows.
    Effect::new(move |_| {
        state.input.track();
        state.edit.track();
        if let Some(bottom) = bottom_ref.get() {
            dom::scroll_into_view(&bottom);
        }
    });

    let theme = move || state.theme.get().as_str();

    view! {
        <div class=css::container data-theme=theme>
            <div class=css::display>
                <For
                    each=move || state.display.with(|lines| lines.to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>
            <div class=css::divider></div>
            <div class=css::input>
                <For
                    each=move || state.input.with(|lines| lines.to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
                <div class=css::editLine>
                    <span class=css::prompt>{move || state.prompt.get()}</span>
                    <span class=css::cwd>{move || state.cwd.get()}</span>
                    <span>{move || state.edit.with(|b| b.before().to_string())}</span>
                    <span class=css::caret>{move || state.edit.with(|b| b.caret().to_string())}</span>
                    <span>{move || state.edit.with(|b| b.after().to_string())}</span>
                </div>
                <div node_ref=bottom_ref></div>
            </div>
        </div>
    }
}
