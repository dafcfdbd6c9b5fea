//! Frame clock, timers, spawning, storage, clipboard and navigation.

use folio_core::error::{ClipboardError, StorageError};
use folio_core::services::{
    Clipboard, FrameHandle, FrameScheduler, LocalBoxFuture, Navigator, Spawn, Storage, Timer,
};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::utils::dom;

// =============================================================================
// Scheduling
// =============================================================================

/// `requestAnimationFrame`-backed frame clock.
#[derive(Clone, Copy, Default)]
pub struct RafFrames;

impl FrameScheduler for RafFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> FrameHandle {
        let Some(window) = dom::window() else {
            return FrameHandle(0);
        };
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => FrameHandle(id),
            Err(error) => {
                tracing::warn!(?error, "requestAnimationFrame failed");
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Some(window) = dom::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}

/// `setTimeout` sleeps via gloo-timers.
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// Runs tasks on the browser microtask queue.
#[derive(Clone, Copy, Default)]
pub struct LocalSpawner;

impl Spawn for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

// =============================================================================
// Storage
// =============================================================================

/// `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|error| StorageError::Write {
                key: key.to_string(),
                message: format!("{error:?}"),
            })
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// `navigator.clipboard`, looked up dynamically since not every context
/// exposes it.
fn clipboard_method(name: &str) -> Result<(JsValue, Function), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())
        .ok()
        .filter(|value| !value.is_undefined())
        .ok_or(ClipboardError::Unavailable)?;
    let method = Reflect::get(&clipboard, &name.into())
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    Ok((clipboard, method))
}

/// Copies the document selection with `writeText`.
#[derive(Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn copy_selection(&self) -> Result<(), ClipboardError> {
        let text = dom::selected_text().ok_or(ClipboardError::EmptySelection)?;
        let (clipboard, write_text) = clipboard_method("writeText")?;
        let promise = write_text
            .call1(&clipboard, &text.into())
            .map_err(|error| ClipboardError::Rejected(format!("{error:?}")))?;

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(error) = JsFuture::from(Promise::from(promise)).await {
                tracing::warn!(?error, "clipboard write rejected");
            }
        });
        Ok(())
    }
}

/// Reads clipboard text with `readText`.
pub async fn read_clipboard() -> Result<String, ClipboardError> {
    let (clipboard, read_text) = clipboard_method("readText")?;
    let promise = read_text
        .call0(&clipboard)
        .map_err(|error| ClipboardError::Rejected(format!("{error:?}")))?;
    let text = JsFuture::from(Promise::from(promise))
        .await
        .map_err(|error| ClipboardError::Rejected(format!("{error:?}")))?;
    text.as_string()
        .ok_or_else(|| ClipboardError::Rejected("clipboard did not return text".to_string()))
}

// =============================================================================
// Navigation
// =============================================================================

/// Opens links in new tabs and mail addresses in the mail client.
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_external(&self, url: &str) {
        let Some(window) = dom::window() else { return };
        if let Err(error) = window.open_with_url_and_target(url, "_blank") {
            tracing::warn!(url, ?error, "failed to open window");
        }
    }

    fn open_mail(&self, address: &str) {
        let Some(window) = dom::window() else { return };
        if let Err(error) = window.location().set_href(&format!("mailto:{address}")) {
            tracing::warn!(address, ?error, "failed to open mail client");
        }
    }
}
