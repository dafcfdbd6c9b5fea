//! Browser implementations of the core's host capabilities.

mod browser;
mod sink;
mod stats;

pub use browser::{
    BrowserClipboard, BrowserNavigator, GlooTimer, LocalSpawner, LocalStorage, RafFrames,
    read_clipboard,
};
pub use sink::SignalSink;
pub use stats::WebStats;
