//! Typewriter scheduler.
//!
//! Reveals a block of lines onto the display surface, one unit per
//! elapsed interval, driven by a [`FrameScheduler`]. Only one job runs at
//! a time: starting a job cancels the pending frame of the previous one
//! and bumps a generation counter so a frame that slipped through is
//! ignored.

mod job;

pub use job::{RevealJob, RevealUnit, Tick};

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{OutputLine, Surface};
use crate::services::{DisplaySink, FrameHandle, FrameScheduler};

#[derive(Default)]
struct State {
    generation: u64,
    job: Option<RevealJob>,
    pending: Option<FrameHandle>,
}

/// Cloneable handle to the animation of one display surface.
#[derive(Clone)]
pub struct Typewriter {
    state: Rc<RefCell<State>>,
    sink: Rc<dyn DisplaySink>,
    frames: Rc<dyn FrameScheduler>,
    surface: Surface,
}

impl Typewriter {
    pub fn new(sink: Rc<dyn DisplaySink>, frames: Rc<dyn FrameScheduler>) -> Self {
        Self {
            state: Rc::default(),
            sink,
            frames,
            surface: Surface::Display,
        }
    }

    /// Replaces any running job with a character reveal of `content`.
    pub fn reveal(&self, content: Vec<String>, speed: f64) {
        self.start(content, RevealUnit::Char, speed);
    }

    /// Replaces any running job and starts from the first unit.
    pub fn start(&self, content: Vec<String>, unit: RevealUnit, speed: f64) {
        let job = RevealJob::new(content, unit, speed);
        let initial = job.visible();
        let finished = job.is_finished();

        let generation = {
            let mut state = self.state.borrow_mut();
            if let Some(handle) = state.pending.take() {
                self.frames.cancel_frame(handle);
            }
            state.generation += 1;
            state.job = Some(job);
            state.generation
        };
        tracing::debug!(generation, ?unit, speed, "reveal started");

        self.render(initial);
        if !finished {
            self.schedule(generation);
        }
    }

    /// Halts the running job, leaving what is already on screen.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(handle) = state.pending.take() {
            self.frames.cancel_frame(handle);
        }
        state.generation += 1;
        state.job = None;
    }

    /// Whether a job is still revealing content.
    pub fn is_active(&self) -> bool {
        self.state
            .borrow()
            .job
            .as_ref()
            .is_some_and(|job| !job.is_finished())
    }

    fn schedule(&self, generation: u64) {
        let this = self.clone();
        let handle = self
            .frames
            .request_frame(Box::new(move |now| this.on_frame(generation, now)));

        let mut state = self.state.borrow_mut();
        if state.generation == generation {
            state.pending = Some(handle);
        } else {
            self.frames.cancel_frame(handle);
        }
    }

    fn on_frame(&self, generation: u64, now: f64) {
        let (lines, done) = {
            let mut state = self.state.borrow_mut();
            if state.generation != generation {
                return;
            }
            state.pending = None;
            let Some(job) = state.job.as_mut() else {
                return;
            };
            match job.tick(now) {
                Tick::Waiting => (None, false),
                Tick::Advanced => (Some(job.visible()), false),
                Tick::Finished => (Some(job.visible()), true),
            }
        };

        if let Some(lines) = lines {
            self.render(lines);
        }
        if done {
            tracing::debug!(generation, "reveal finished");
        } else {
            self.schedule(generation);
        }
    }

    fn render(&self, lines: Vec<String>) {
        self.sink.replace_all(
            self.surface,
            lines.into_iter().map(OutputLine::text).collect(),
        );
    }
}
