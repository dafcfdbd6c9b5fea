//! Capabilities the core consumes from its host.
//!
//! Every browser-facing concern sits behind one of these traits so the
//! command layer, scheduler and coordinator can run against in-memory
//! doubles in tests.

mod cache;
mod stats;
mod visitor;

pub use cache::RepoStatsCache;
pub use stats::{
    GlobalStats, RepoStats, VisitorStats, command_increment, command_key, page_load_increment,
};
pub use visitor::VisitorLog;

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::error::{ClipboardError, StorageError};
use crate::models::{OutputBuffer, OutputLine, Surface};

/// A boxed future that stays on the current thread.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

// ============================================================================
// Display
// ============================================================================

/// Write access to the two output surfaces.
pub trait DisplaySink {
    /// Runs `f` against the buffer of `surface`.
    fn update(&self, surface: Surface, f: &mut dyn FnMut(&mut OutputBuffer));

    fn append_line(&self, surface: Surface, line: OutputLine) {
        let mut line = Some(line);
        self.update(surface, &mut |buf| {
            if let Some(line) = line.take() {
                buf.push(line);
            }
        });
    }

    fn replace_all(&self, surface: Surface, lines: Vec<OutputLine>) {
        let mut lines = Some(lines);
        self.update(surface, &mut |buf| {
            if let Some(lines) = lines.take() {
                buf.replace_all(lines);
            }
        });
    }

    /// Overwrites the newest line; an empty surface is left empty.
    fn replace_last(&self, surface: Surface, line: OutputLine) {
        let mut line = Some(line);
        self.update(surface, &mut |buf| {
            if let (Some(last), Some(line)) = (buf.last_mut(), line.take()) {
                *last = line;
            }
        });
    }

    fn clear(&self, surface: Surface) {
        self.update(surface, &mut |buf| buf.clear());
    }
}

// ============================================================================
// Browser Capabilities
// ============================================================================

/// Fire-and-forget navigation.
pub trait Navigator {
    /// Opens `url` in a new browsing context.
    fn open_external(&self, url: &str);
    /// Hands a `mailto:` address to the mail client.
    fn open_mail(&self, address: &str);
}

pub trait Clipboard {
    /// Copies the current text selection to the clipboard.
    fn copy_selection(&self) -> Result<(), ClipboardError>;
}

/// Key-value persistence (localStorage in the browser).
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// ============================================================================
// Scheduling
// ============================================================================

/// Runs detached tasks on the host's event loop.
pub trait Spawn {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// One-shot delays.
pub trait Timer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Identifies a requested frame so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Per-frame callbacks, driven by the display refresh in the browser.
pub trait FrameScheduler {
    /// Schedules `callback` for the next frame; it receives a timestamp in
    /// milliseconds.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> FrameHandle;
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Visitor and repository statistics.
///
/// Every failure degrades to `None` or a no-op; nothing here reports an
/// error to the command layer.
pub trait StatsService {
    /// Repository stats, served from a short-lived cache when possible.
    fn repo_stats(&self) -> LocalBoxFuture<'static, Option<RepoStats>>;
    /// Aggregate counters across all visitors.
    fn global_stats(&self) -> LocalBoxFuture<'static, Option<GlobalStats>>;
    /// This browser's visitor counters.
    fn visitor_stats(&self) -> VisitorStats;
    /// Counts a page load as a new session for this browser.
    fn begin_session(&self);
    fn record_command_locally(&self);
    fn record_command_globally(&self, name: &str) -> LocalBoxFuture<'static, ()>;
    fn record_page_load_globally(&self) -> LocalBoxFuture<'static, ()>;
}
