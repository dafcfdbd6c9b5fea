//! UI components built with Leptos.
//!
//! - [`terminal`] - Two-surface terminal emulator

pub mod terminal;

pub use terminal::Terminal;
