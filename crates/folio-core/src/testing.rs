//! In-memory implementations of the host capabilities.
//!
//! Compiled for unit tests and behind the `mock` feature for integration
//! tests and hosts that want a headless terminal.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::error::{ClipboardError, StorageError};
use crate::models::{OutputBuffer, OutputLine, Surface};
use crate::services::{
    Clipboard, Clock, DisplaySink, FrameHandle, FrameScheduler, GlobalStats, LocalBoxFuture,
    Navigator, RepoStats, Spawn, StatsService, Storage, Timer, VisitorStats,
};

// ============================================================================
// Storage
// ============================================================================

/// Shared map standing in for localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Display
// ============================================================================

/// Both surfaces held in memory.
#[derive(Clone, Default)]
pub struct Screens {
    display: Rc<RefCell<OutputBuffer>>,
    input: Rc<RefCell<OutputBuffer>>,
}

impl Screens {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, surface: Surface) -> &RefCell<OutputBuffer> {
        match surface {
            Surface::Display => &self.display,
            Surface::Input => &self.input,
        }
    }

    pub fn snapshot(&self, surface: Surface) -> Vec<OutputLine> {
        self.cell(surface).borrow().to_vec()
    }

    /// Plain-text rendering of every line on `surface`.
    pub fn lines(&self, surface: Surface) -> Vec<String> {
        self.cell(surface)
            .borrow()
            .iter()
            .map(OutputLine::as_text)
            .collect()
    }
}

impl DisplaySink for Screens {
    fn update(&self, surface: Surface, f: &mut dyn FnMut(&mut OutputBuffer)) {
        f(&mut self.cell(surface).borrow_mut());
    }
}

// ============================================================================
// Frames and Timers
// ============================================================================

type FrameCallback = Box<dyn FnOnce(f64)>;

#[derive(Default)]
struct FrameQueue {
    next_id: i32,
    now: f64,
    queued: Vec<(FrameHandle, FrameCallback)>,
}

/// Frame clock advanced by hand.
#[derive(Clone, Default)]
pub struct ManualFrames {
    inner: Rc<RefCell<FrameQueue>>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queued.len()
    }

    pub fn now(&self) -> f64 {
        self.inner.borrow().now
    }

    /// Moves the clock forward by `ms` and fires one frame. Returns how
    /// many callbacks ran.
    pub fn advance(&self, ms: f64) -> usize {
        let (now, callbacks) = {
            let mut queue = self.inner.borrow_mut();
            queue.now += ms;
            (queue.now, std::mem::take(&mut queue.queued))
        };
        let count = callbacks.len();
        for (_, callback) in callbacks {
            callback(now);
        }
        count
    }

    /// Fires frames `step_ms` apart until nothing is queued or `limit`
    /// frames have run. Returns the number of frames fired.
    pub fn run_until_idle(&self, step_ms: f64, limit: usize) -> usize {
        let mut frames = 0;
        while self.pending() > 0 && frames < limit {
            self.advance(step_ms);
            frames += 1;
        }
        frames
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> FrameHandle {
        let mut queue = self.inner.borrow_mut();
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.queued.push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.inner.borrow_mut().queued.retain(|(h, _)| *h != handle);
    }
}

/// Timer whose sleeps never finish.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleTimer;

impl Timer for IdleTimer {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(std::future::pending())
    }
}

/// Timer whose first `ticks` sleeps finish at once; later ones never do.
#[derive(Clone, Debug, Default)]
pub struct TickTimer {
    remaining: Rc<Cell<usize>>,
}

impl TickTimer {
    pub fn new(ticks: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(ticks)),
        }
    }
}

impl Timer for TickTimer {
    fn sleep(&self, _ms: u32) -> LocalBoxFuture<'static, ()> {
        match self.remaining.get() {
            0 => Box::pin(std::future::pending()),
            n => {
                self.remaining.set(n - 1);
                Box::pin(std::future::ready(()))
            }
        }
    }
}

/// Collects spawned tasks until the test drives them.
#[derive(Clone, Default)]
pub struct QueueSpawner {
    tasks: Rc<RefCell<Vec<LocalBoxFuture<'static, ()>>>>,
}

impl QueueSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Awaits queued tasks in order, including ones they spawn.
    pub async fn run_all(&self) {
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                if tasks.is_empty() {
                    None
                } else {
                    Some(tasks.remove(0))
                }
            };
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }
}

impl Spawn for QueueSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }
}

/// Clock frozen at a given instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// Navigation and Clipboard
// ============================================================================

/// Records every navigation request.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub opened: Rc<RefCell<Vec<String>>>,
    pub mailed: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    fn open_mail(&self, address: &str) {
        self.mailed.borrow_mut().push(address.to_string());
    }
}

/// Clipboard that counts copies, or fails every time.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub copies: Rc<Cell<u32>>,
    pub fail: bool,
}

impl Clipboard for FakeClipboard {
    fn copy_selection(&self) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable);
        }
        self.copies.set(self.copies.get() + 1);
        Ok(())
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Stats service with canned answers that records what it was asked.
#[derive(Clone)]
pub struct StubStats {
    pub repo: Option<RepoStats>,
    pub global: Option<GlobalStats>,
    pub visitor: VisitorStats,
    pub repo_fetches: Rc<Cell<u32>>,
    pub local_commands: Rc<Cell<u32>>,
    pub sessions: Rc<Cell<u32>>,
    pub page_loads: Rc<Cell<u32>>,
    pub global_commands: Rc<RefCell<Vec<String>>>,
}

impl StubStats {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            repo: None,
            global: None,
            visitor: VisitorStats::first_visit(now),
            repo_fetches: Rc::default(),
            local_commands: Rc::default(),
            sessions: Rc::default(),
            page_loads: Rc::default(),
            global_commands: Rc::default(),
        }
    }
}

impl StatsService for StubStats {
    fn repo_stats(&self) -> LocalBoxFuture<'static, Option<RepoStats>> {
        self.repo_fetches.set(self.repo_fetches.get() + 1);
        let repo = self.repo.clone();
        Box::pin(async move { repo })
    }

    fn global_stats(&self) -> LocalBoxFuture<'static, Option<GlobalStats>> {
        let global = self.global.clone();
        Box::pin(async move { global })
    }

    fn visitor_stats(&self) -> VisitorStats {
        self.visitor.clone()
    }

    fn begin_session(&self) {
        self.sessions.set(self.sessions.get() + 1);
    }

    fn record_command_locally(&self) {
        self.local_commands.set(self.local_commands.get() + 1);
    }

    fn record_command_globally(&self, name: &str) -> LocalBoxFuture<'static, ()> {
        let calls = Rc::clone(&self.global_commands);
        let name = name.to_string();
        Box::pin(async move { calls.borrow_mut().push(name) })
    }

    fn record_page_load_globally(&self) -> LocalBoxFuture<'static, ()> {
        let loads = Rc::clone(&self.page_loads);
        Box::pin(async move { loads.set(loads.get() + 1) })
    }
}
