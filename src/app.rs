//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and the wiring of browser services into the terminal controller.

use std::rc::Rc;

use folio_core::content::StaticContent;
use folio_core::services::{DisplaySink, Spawn, SystemClock};
use folio_core::terminal::Terminal as Controller;
use folio_core::{
    AsyncCoordinator, DirTable, EditBuffer, KeyEvent, OutputBuffer, Services, Theme, Typewriter,
};
use leptos::prelude::*;

use crate::components::Terminal;
use crate::services::{
    BrowserClipboard, BrowserNavigator, GlooTimer, LocalSpawner, RafFrames, SignalSink, WebStats,
};

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state mirrored into Leptos signals.
///
/// The controller owns the truth; after every key event its editor and
/// session are copied here so views re-render. Output surfaces are
/// written directly through [`SignalSink`].
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Read-only surface driven by the typewriter.
    pub display: RwSignal<OutputBuffer>,
    /// Echoed commands and their output.
    pub input: RwSignal<OutputBuffer>,
    /// Line being edited.
    pub edit: RwSignal<EditBuffer>,
    pub prompt: RwSignal<String>,
    pub cwd: RwSignal<String>,
    pub theme: RwSignal<Theme>,
}

impl TerminalState {
    pub fn new() -> Self {
        let session = folio_core::Session::new();
        Self {
            display: RwSignal::new(OutputBuffer::default()),
            input: RwSignal::new(OutputBuffer::default()),
            edit: RwSignal::new(EditBuffer::new()),
            prompt: RwSignal::new(session.prompt),
            cwd: RwSignal::new(session.cwd),
            theme: RwSignal::new(session.theme),
        }
    }

    pub fn sink(&self) -> SignalSink {
        SignalSink {
            display: self.display,
            input: self.input,
        }
    }

    /// Copies editor and session state out of the controller.
    fn sync(&self, controller: &Controller) {
        self.edit.set(controller.buffer().clone());

        let session = controller.session();
        if self.prompt.with_untracked(|p| *p != session.prompt) {
            self.prompt.set(session.prompt.clone());
        }
        if self.cwd.with_untracked(|c| *c != session.cwd) {
            self.cwd.set(session.cwd.clone());
        }
        if self.theme.get_untracked() != session.theme {
            self.theme.set(session.theme);
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Builds the controller with every browser-backed collaborator.
fn build_controller(sink: SignalSink) -> Controller {
    let sink: Rc<dyn DisplaySink> = Rc::new(sink);
    let spawner: Rc<dyn Spawn> = Rc::new(LocalSpawner);
    let services = Services {
        fs: Rc::new(DirTable::portfolio()),
        content: Rc::new(StaticContent),
        navigator: Rc::new(BrowserNavigator),
        stats: Rc::new(WebStats::new()),
        clock: Rc::new(SystemClock),
        sink: Rc::clone(&sink),
        typewriter: Typewriter::new(Rc::clone(&sink), Rc::new(RafFrames)),
        coordinator: AsyncCoordinator::new(Rc::clone(&spawner), Rc::new(GlooTimer), sink),
    };
    Controller::new(services, spawner, Rc::new(BrowserClipboard))
}

/// Application-wide context, accessed with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,
    controller: StoredValue<Controller, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let terminal = TerminalState::new();
        let controller = build_controller(terminal.sink());
        Self {
            terminal,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Counts the visit and plays the start banner.
    pub fn boot(&self) {
        self.controller.with_value(|controller| controller.boot());
    }

    /// Routes one editor event through the controller.
    pub fn handle_key(&self, event: KeyEvent) {
        let terminal = self.terminal;
        self.controller.update_value(|controller| {
            controller.handle_key(event);
            terminal.sync(controller);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Terminal />
        </ErrorBoundary>
    }
}
