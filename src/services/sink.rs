//! Output surfaces backed by Leptos signals.

use folio_core::services::DisplaySink;
use folio_core::{OutputBuffer, Surface};
use leptos::prelude::*;

/// Writes each surface into its own signal so the views re-render.
#[derive(Clone, Copy)]
pub struct SignalSink {
    pub display: RwSignal<OutputBuffer>,
    pub input: RwSignal<OutputBuffer>,
}

impl SignalSink {
    fn signal(&self, surface: Surface) -> RwSignal<OutputBuffer> {
        match surface {
            Surface::Display => self.display,
            Surface::Input => self.input,
        }
    }
}

impl DisplaySink for SignalSink {
    fn update(&self, surface: Surface, f: &mut dyn FnMut(&mut OutputBuffer)) {
        self.signal(surface).update(|buffer| f(buffer));
    }
}
