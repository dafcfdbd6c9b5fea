//! Host-agnostic core of the portfolio terminal.
//!
//! Everything here runs without a browser: the virtual filesystem, the
//! line editor, command dispatch, the typewriter and the async command
//! coordinator. Hosts plug in through the traits in [`services`].

pub mod animation;
pub mod commands;
pub mod config;
pub mod content;
pub mod coordinator;
pub mod editor;
pub mod error;
pub mod filesystem;
pub mod models;
pub mod services;
pub mod terminal;
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use animation::{RevealUnit, Typewriter};
pub use commands::{CommandEnv, CommandSpec, Dispatch, Registry, Services};
pub use coordinator::AsyncCoordinator;
pub use editor::{EditBuffer, EditOutcome, KeyEvent, LineEditor};
pub use error::{ClipboardError, ServiceError, StorageError};
pub use filesystem::DirTable;
pub use models::{FileKind, OutputBuffer, OutputLine, OutputLineData, Session, Surface, Theme};
pub use terminal::Terminal;
