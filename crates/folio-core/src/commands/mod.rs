//! Command registry and dispatcher.
//!
//! Commands are an ordered list of [`CommandSpec`]s. A submitted line goes
//! to the first spec whose matcher accepts it; later specs are never
//! consulted, so registration order settles overlapping prefixes.

mod file;
mod info;
mod link;
mod stats;
mod system;

pub use stats::{global_report, relative_date, stats_report};

use std::rc::Rc;

use crate::animation::Typewriter;
use crate::content::ContentSource;
use crate::coordinator::AsyncCoordinator;
use crate::filesystem::DirTable;
use crate::models::{OutputBuffer, OutputLine, Session};
use crate::services::{Clock, DisplaySink, Navigator, StatsService};
use crate::utils::take_chars;

// ============================================================================
// Descriptors
// ============================================================================

/// Decides whether a command handles the raw input line.
pub type Matcher = fn(&str) -> bool;

/// Runs a command against the input surface buffer.
pub type Executor = fn(&str, &mut OutputBuffer, &mut CommandEnv<'_>);

/// One registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    /// One-line summary shown by `man` when a command has no page.
    pub description: &'static str,
    pub matches: Matcher,
    pub execute: Executor,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Command names offered by Tab completion, in declared order.
pub const COMPLETION_NAMES: &[&str] = &[
    "view-source",
    "view-react-docs",
    "clear",
    "help",
    "hello there",
    "echo",
    "ln",
    "ls",
    "cd",
    "theme",
    "pwd",
    "cat",
    "whoami",
    "ps",
    "start",
    "time",
    "stats",
    "global-stats",
    "history",
    "man",
    "projects",
    "stop",
];

// ============================================================================
// Environment
// ============================================================================

/// Collaborators shared by every command.
#[derive(Clone)]
pub struct Services {
    pub fs: Rc<DirTable>,
    pub content: Rc<dyn ContentSource>,
    pub navigator: Rc<dyn Navigator>,
    pub stats: Rc<dyn StatsService>,
    pub clock: Rc<dyn Clock>,
    pub sink: Rc<dyn DisplaySink>,
    pub typewriter: Typewriter,
    pub coordinator: AsyncCoordinator,
}

/// What an executor may read and change.
pub struct CommandEnv<'a> {
    pub session: &'a mut Session,
    /// Submitted lines, oldest first, including the current one.
    pub history: &'a [String],
    /// Registered commands, in dispatch order.
    pub commands: &'a [CommandSpec],
    pub services: &'a Services,
}

// ============================================================================
// Registry
// ============================================================================

/// How a line was dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank input; nothing ran.
    Empty,
    Handled(&'static str),
    NotFound,
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// Registry with no commands.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The portfolio command set: system, file, link, info, stats.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for spec in system::commands()
            .into_iter()
            .chain(file::commands())
            .chain(link::commands())
            .chain(info::commands())
            .chain(stats::commands())
        {
            registry.register(spec);
        }
        registry
    }

    /// Appends `spec`; it loses ties against everything registered before.
    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.push(spec);
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// First command accepting `input`.
    pub fn find(&self, input: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| (spec.matches)(input))
    }

    /// Runs the first matching command, or reports an unknown one.
    pub fn dispatch(
        &self,
        input: &str,
        out: &mut OutputBuffer,
        env: &mut CommandEnv<'_>,
    ) -> Dispatch {
        if input.trim().is_empty() {
            return Dispatch::Empty;
        }
        match self.find(input) {
            Some(spec) => {
                tracing::debug!(command = spec.name, "dispatching");
                (spec.execute)(input, out, env);
                Dispatch::Handled(spec.name)
            }
            None => {
                tracing::debug!(input, "command not found");
                out.push(OutputLine::error(format!("command not found: {input}")));
                Dispatch::NotFound
            }
        }
    }
}

// ============================================================================
// Matching Helpers
// ============================================================================

/// Lowercased, trimmed input.
pub(crate) fn normalized(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Exact match on the normalized input.
pub(crate) fn is(input: &str, name: &str) -> bool {
    normalized(input) == name
}

/// Lowercased, trimmed first `n` chars of the raw input.
pub(crate) fn head(input: &str, n: usize) -> String {
    take_chars(input, n).to_lowercase().trim().to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::StaticContent;
    use crate::testing::{
        FixedClock, IdleTimer, ManualFrames, QueueSpawner, RecordingNavigator, Screens, StubStats,
    };
    use chrono::DateTime;

    /// Everything a command test needs, with handles to inspect effects.
    pub(crate) struct Harness {
        pub services: Services,
        pub session: Session,
        pub history: Vec<String>,
        pub screens: Screens,
        pub frames: ManualFrames,
        pub spawner: QueueSpawner,
        pub navigator: RecordingNavigator,
        pub out: OutputBuffer,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_stats(|_| {})
        }

        pub fn with_stats(configure: impl FnOnce(&mut StubStats)) -> Self {
            let now = DateTime::from_timestamp(1_709_287_200, 0).unwrap();
            let mut stats = StubStats::new(now);
            configure(&mut stats);

            let screens = Screens::new();
            let frames = ManualFrames::new();
            let spawner = QueueSpawner::new();
            let navigator = RecordingNavigator::default();
            let sink: Rc<dyn DisplaySink> = Rc::new(screens.clone());
            let services = Services {
                fs: Rc::new(DirTable::portfolio()),
                content: Rc::new(StaticContent),
                navigator: Rc::new(navigator.clone()),
                stats: Rc::new(stats),
                clock: Rc::new(FixedClock(now)),
                sink: Rc::clone(&sink),
                typewriter: Typewriter::new(Rc::clone(&sink), Rc::new(frames.clone())),
                coordinator: AsyncCoordinator::new(
                    Rc::new(spawner.clone()),
                    Rc::new(IdleTimer),
                    Rc::clone(&sink),
                ),
            };
            Self {
                services,
                session: Session::new(),
                history: Vec::new(),
                screens,
                frames,
                spawner,
                navigator,
                out: OutputBuffer::default(),
            }
        }

        /// Dispatches `input` through the portfolio registry.
        pub fn run(&mut self, input: &str) -> Dispatch {
            self.history.push(input.to_string());
            let registry = Registry::new();
            let mut env = CommandEnv {
                session: &mut self.session,
                history: &self.history,
                commands: registry.commands(),
                services: &self.services,
            };
            registry.dispatch(input, &mut self.out, &mut env)
        }

        /// Plain text of the input surface buffer.
        pub fn output(&self) -> Vec<String> {
            self.out.iter().map(OutputLine::as_text).collect()
        }

        pub fn take_output(&mut self) -> Vec<String> {
            let lines = self.output();
            self.out.clear();
            lines
        }

        pub fn display(&self) -> Vec<String> {
            self.screens.lines(crate::models::Surface::Display)
        }
    }

    fn marker_a(_: &str, out: &mut OutputBuffer, _: &mut CommandEnv<'_>) {
        out.push(OutputLine::text("a"));
    }

    fn marker_b(_: &str, out: &mut OutputBuffer, _: &mut CommandEnv<'_>) {
        out.push(OutputLine::text("b"));
    }

    #[test]
    fn test_first_registered_wins() {
        let mut registry = Registry::empty();
        registry.register(CommandSpec {
            name: "a",
            description: "",
            matches: |input| input.starts_with('x'),
            execute: marker_a,
        });
        registry.register(CommandSpec {
            name: "b",
            description: "",
            matches: |input| input.starts_with("xy"),
            execute: marker_b,
        });

        let mut h = Harness::new();
        let mut env = CommandEnv {
            session: &mut h.session,
            history: &[],
            commands: registry.commands(),
            services: &h.services,
        };
        assert_eq!(registry.dispatch("xyz", &mut h.out, &mut env), Dispatch::Handled("a"));
        assert_eq!(h.output(), vec!["a"]);
    }

    #[test]
    fn test_empty_input_does_nothing() {
        let mut h = Harness::new();
        assert_eq!(h.run("   "), Dispatch::Empty);
        assert!(h.output().is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let mut h = Harness::new();
        assert_eq!(h.run("rm -rf /"), Dispatch::NotFound);
        assert_eq!(h.output(), vec!["command not found: rm -rf /"]);
    }

    #[test]
    fn test_completion_names_all_dispatch() {
        let registry = Registry::new();
        for name in COMPLETION_NAMES {
            assert!(registry.find(name).is_some(), "{name} is not registered");
        }
    }

    #[test]
    fn test_broad_prefixes_resolve_by_order() {
        let registry = Registry::new();
        assert_eq!(registry.find("ll").map(|s| s.name), Some("ls"));
        assert_eq!(registry.find("la ~").map(|s| s.name), Some("ls"));
        assert_eq!(registry.find("pwd").map(|s| s.name), Some("pwd"));
        assert_eq!(registry.find("ps >").map(|s| s.name), Some("ps"));
        assert_eq!(registry.find("global-stats").map(|s| s.name), Some("global-stats"));
        assert_eq!(registry.find("stats").map(|s| s.name), Some("stats"));
        assert_eq!(registry.find("show resume.txt").map(|s| s.name), Some("cat"));
    }

    #[test]
    fn test_head() {
        assert_eq!(head("THEME dark", 5), "theme");
        assert_eq!(head("cd", 3), "cd");
        assert_eq!(head("c d", 2), "c");
    }
}
