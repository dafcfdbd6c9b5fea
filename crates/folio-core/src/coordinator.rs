//! At-most-one-per-name async command runner.
//!
//! Long-running commands hand their fetch to [`AsyncCoordinator::run`].
//! While a name is in flight further runs under it are dropped; different
//! names run independently. A spinner animates the last input line until
//! the fetch settles.

use std::cell::RefCell;
use std::collections::HashSet;
use std::future::{Future, poll_fn};
use std::pin::pin;
use std::rc::Rc;
use std::task::Poll;

use crate::config::{SPINNER_FRAMES, SPINNER_INTERVAL_MS};
use crate::error::ServiceError;
use crate::models::{OutputLine, Surface};
use crate::services::{DisplaySink, Spawn, Timer};

/// Shared set of command names with a fetch in flight.
#[derive(Clone, Debug, Default)]
pub struct PendingSet {
    names: Rc<RefCell<HashSet<String>>>,
}

impl PendingSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.borrow().contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }

    /// Claims `name`; `None` if it is already claimed.
    fn claim(&self, name: &str) -> Option<PendingGuard> {
        if !self.names.borrow_mut().insert(name.to_string()) {
            return None;
        }
        Some(PendingGuard {
            set: self.clone(),
            name: name.to_string(),
        })
    }
}

/// Releases a claimed name when dropped, whatever the outcome.
struct PendingGuard {
    set: PendingSet,
    name: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.set.names.borrow_mut().remove(&self.name);
    }
}

/// Spinner text for the given frame number.
pub fn spinner_line(message: &str, frame: usize) -> String {
    format!("{message} {}", SPINNER_FRAMES[frame % SPINNER_FRAMES.len()])
}

/// Polls `work` and `progress` together and returns once `work` is done.
pub async fn race_with_progress<F, P>(work: F, progress: P) -> F::Output
where
    F: Future,
    P: Future<Output = ()>,
{
    let mut work = pin!(work);
    let mut progress = pin!(progress);
    let mut progress_done = false;
    poll_fn(move |cx| {
        if let Poll::Ready(output) = work.as_mut().poll(cx) {
            return Poll::Ready(output);
        }
        if !progress_done && progress.as_mut().poll(cx).is_ready() {
            progress_done = true;
        }
        Poll::Pending
    })
    .await
}

/// Runs async commands with per-name de-duplication.
#[derive(Clone)]
pub struct AsyncCoordinator {
    pending: PendingSet,
    spawner: Rc<dyn Spawn>,
    timer: Rc<dyn Timer>,
    sink: Rc<dyn DisplaySink>,
}

impl AsyncCoordinator {
    pub fn new(spawner: Rc<dyn Spawn>, timer: Rc<dyn Timer>, sink: Rc<dyn DisplaySink>) -> Self {
        Self {
            pending: PendingSet::default(),
            spawner,
            timer,
            sink,
        }
    }

    pub fn pending(&self) -> &PendingSet {
        &self.pending
    }

    /// Starts `fetch` under `name` unless that name is already in flight.
    ///
    /// On success the result goes through `build` and then `display`; on
    /// failure the error is logged and nothing is displayed. The name is
    /// released in either case. While waiting, the last line of the input
    /// surface shows `progress` with a spinner. Returns whether a fetch
    /// was started.
    pub fn run<T, Fut, B, D>(
        &self,
        name: &str,
        progress: &str,
        fetch: impl FnOnce() -> Fut + 'static,
        build: B,
        display: D,
    ) -> bool
    where
        T: 'static,
        Fut: Future<Output = Result<T, ServiceError>> + 'static,
        B: FnOnce(T) -> Vec<String> + 'static,
        D: FnOnce(Vec<String>) + 'static,
    {
        let Some(guard) = self.pending.claim(name) else {
            tracing::debug!(command = name, "already in flight");
            return false;
        };

        let spinner = self.spinner(progress.to_string());
        let task = async move {
            match race_with_progress(fetch(), spinner).await {
                Ok(value) => display(build(value)),
                Err(error) => {
                    tracing::warn!(command = %guard.name, %error, "async command failed");
                }
            }
            drop(guard);
        };
        self.spawner.spawn(Box::pin(task));
        true
    }

    fn spinner(&self, message: String) -> impl Future<Output = ()> + 'static {
        let timer = Rc::clone(&self.timer);
        let sink = Rc::clone(&self.sink);
        async move {
            let mut frame = 0;
            loop {
                timer.sleep(SPINNER_INTERVAL_MS).await;
                sink.replace_last(Surface::Input, OutputLine::info(spinner_line(&message, frame)));
                frame += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::testing::{IdleTimer, QueueSpawner, Screens, TickTimer};

    fn coordinator() -> (AsyncCoordinator, QueueSpawner, Screens) {
        let spawner = QueueSpawner::new();
        let screens = Screens::new();
        let coord = AsyncCoordinator::new(
            Rc::new(spawner.clone()),
            Rc::new(IdleTimer),
            Rc::new(screens.clone()),
        );
        (coord, spawner, screens)
    }

    #[tokio::test]
    async fn test_duplicate_run_is_dropped() {
        let (coord, spawner, _screens) = coordinator();
        let fetches = Rc::new(Cell::new(0));
        let displays = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let fetches = Rc::clone(&fetches);
            let displays = Rc::clone(&displays);
            coord.run(
                "stats",
                "fetching...",
                move || {
                    fetches.set(fetches.get() + 1);
                    async { Ok::<_, ServiceError>(7) }
                },
                |n| vec![n.to_string()],
                move |_| displays.set(displays.get() + 1),
            );
        }
        assert!(coord.pending().contains("stats"));
        spawner.run_all().await;

        assert_eq!(fetches.get(), 1);
        assert_eq!(displays.get(), 1);
        assert!(coord.pending().is_empty());
    }

    #[tokio::test]
    async fn test_name_released_after_failure() {
        let (coord, spawner, _screens) = coordinator();
        let displayed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&displayed);
        let started = coord.run(
            "global-stats",
            "fetching...",
            || async { Err::<u32, _>(ServiceError::Network("offline".into())) },
            |_| Vec::new(),
            move |_| flag.set(true),
        );
        assert!(started);
        spawner.run_all().await;
        assert!(!displayed.get());
        assert!(!coord.pending().contains("global-stats"));

        // the name can be used again
        assert!(coord.run("global-stats", "", || async { Ok(1) }, |_| Vec::new(), |_| {}));
    }

    #[tokio::test]
    async fn test_distinct_names_are_independent() {
        let (coord, spawner, _screens) = coordinator();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["stats", "global-stats"] {
            let order = Rc::clone(&order);
            let started = coord.run(
                name,
                "",
                move || async move { Ok(name) },
                |n| vec![n.to_string()],
                move |lines| order.borrow_mut().extend(lines),
            );
            assert!(started);
        }
        assert_eq!(coord.pending().len(), 2);
        spawner.run_all().await;
        assert_eq!(*order.borrow(), vec!["stats", "global-stats"]);
    }

    #[tokio::test]
    async fn test_build_output_reaches_display() {
        let (coord, spawner, screens) = coordinator();
        let sink = screens.clone();
        coord.run(
            "stats",
            "",
            || async { Ok(vec!["a", "b"]) },
            |items| items.into_iter().map(str::to_uppercase).collect(),
            move |lines| {
                sink.replace_all(
                    Surface::Display,
                    lines.into_iter().map(OutputLine::text).collect(),
                )
            },
        );
        spawner.run_all().await;
        assert_eq!(screens.lines(Surface::Display), vec!["A", "B"]);
    }

    /// Coordinator whose spinner gets exactly one frame.
    fn ticking_coordinator() -> (AsyncCoordinator, QueueSpawner, Screens) {
        let spawner = QueueSpawner::new();
        let screens = Screens::new();
        let coord = AsyncCoordinator::new(
            Rc::new(spawner.clone()),
            Rc::new(TickTimer::new(1)),
            Rc::new(screens.clone()),
        );
        (coord, spawner, screens)
    }

    fn slow_fetch() -> impl Future<Output = Result<u8, ServiceError>> {
        async {
            tokio::task::yield_now().await;
            Ok(1)
        }
    }

    #[tokio::test]
    async fn test_spinner_rewrites_progress_line() {
        let (coord, spawner, screens) = ticking_coordinator();
        screens.append_line(Surface::Input, OutputLine::text("stats"));
        screens.append_line(Surface::Input, OutputLine::info("fetching statistics..."));
        coord.run("stats", "fetching statistics...", slow_fetch, |_| Vec::new(), |_| {});
        spawner.run_all().await;
        assert_eq!(
            screens.lines(Surface::Input),
            vec!["stats", "fetching statistics... ⠋"]
        );
    }

    #[tokio::test]
    async fn test_spinner_leaves_cleared_surface_empty() {
        let (coord, spawner, screens) = ticking_coordinator();
        coord.run("stats", "fetching statistics...", slow_fetch, |_| Vec::new(), |_| {});
        spawner.run_all().await;
        assert!(screens.lines(Surface::Input).is_empty());
    }

    #[tokio::test]
    async fn test_race_returns_work_output() {
        let out = race_with_progress(async { 5 }, std::future::pending::<()>()).await;
        assert_eq!(out, 5);
        // progress finishing first does not end the race
        let out = race_with_progress(async { 6 }, async {}).await;
        assert_eq!(out, 6);
    }

    #[test]
    fn test_spinner_line_cycles() {
        assert_eq!(spinner_line("loading", 0), "loading ⠋");
        assert_eq!(spinner_line("loading", 9), "loading ⠏");
        assert_eq!(spinner_line("loading", 10), "loading ⠋");
    }
}
