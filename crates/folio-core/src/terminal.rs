//! Terminal session controller.
//!
//! Glues the line editor to the command registry: key events go through
//! the editor, submitted lines are echoed, recorded and dispatched.

use std::rc::Rc;

use crate::commands::{COMPLETION_NAMES, CommandEnv, Dispatch, Registry, Services};
use crate::config::speed;
use crate::editor::{CompletionContext, EditBuffer, EditOutcome, History, KeyEvent, LineEditor};
use crate::models::{OutputLine, Session, Surface};
use crate::services::{Clipboard, Spawn};

pub struct Terminal {
    editor: LineEditor,
    session: Session,
    registry: Registry,
    services: Services,
    spawner: Rc<dyn Spawn>,
    clipboard: Rc<dyn Clipboard>,
}

impl Terminal {
    pub fn new(services: Services, spawner: Rc<dyn Spawn>, clipboard: Rc<dyn Clipboard>) -> Self {
        Self {
            editor: LineEditor::new(),
            session: Session::new(),
            registry: Registry::new(),
            services,
            spawner,
            clipboard,
        }
    }

    /// Starts a visit: counts the session and plays the start banner.
    pub fn boot(&self) {
        let stats = &self.services.stats;
        stats.begin_session();
        self.spawner.spawn(stats.record_page_load_globally());

        if let Some(lines) = self.services.content.content("start") {
            self.services.typewriter.reveal(lines, speed::FAST);
        }
        tracing::info!("terminal booted");
    }

    /// Feeds one key event through the editor and acts on the outcome.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Dispatch> {
        let ctx = CompletionContext {
            commands: COMPLETION_NAMES,
            fs: &self.services.fs,
            cwd: &self.session.cwd,
        };
        match self.editor.apply(event, &ctx) {
            EditOutcome::Edited => None,
            EditOutcome::CopyRequested => {
                if let Err(error) = self.clipboard.copy_selection() {
                    tracing::warn!(%error, "copy failed");
                }
                None
            }
            EditOutcome::Submitted(line) => Some(self.submit(&line)),
        }
    }

    fn submit(&mut self, line: &str) -> Dispatch {
        if !line.is_empty() {
            let stats = &self.services.stats;
            stats.record_command_locally();
            self.spawner.spawn(stats.record_command_globally(line));
        }

        let echo = OutputLine::command(&self.session.prompt, &self.session.cwd, line);
        let mut echo = Some(echo);
        let mut result = Dispatch::Empty;
        let session = &mut self.session;
        let history = self.editor.history().entries();
        let registry = &self.registry;
        let services = &self.services;
        services.sink.update(Surface::Input, &mut |out| {
            if let Some(echo) = echo.take() {
                out.push(echo);
            }
            let mut env = CommandEnv {
                session: &mut *session,
                history,
                commands: registry.commands(),
                services,
            };
            result = registry.dispatch(line, out, &mut env);
        });
        result
    }

    pub fn buffer(&self) -> &EditBuffer {
        self.editor.buffer()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &History {
        self.editor.history()
    }

    pub fn services(&self) -> &Services {
        &self.services
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::DateTime;

    use super::*;
    use crate::animation::Typewriter;
    use crate::content::StaticContent;
    use crate::coordinator::AsyncCoordinator;
    use crate::filesystem::DirTable;
    use crate::testing::{
        FakeClipboard, FixedClock, IdleTimer, ManualFrames, QueueSpawner, RecordingNavigator,
        Screens, StubStats,
    };

    struct Fixture {
        terminal: Terminal,
        screens: Screens,
        frames: ManualFrames,
        spawner: QueueSpawner,
        stats: StubStats,
        copies: Rc<Cell<u32>>,
    }

    fn fixture(clipboard: FakeClipboard) -> Fixture {
        let now = DateTime::from_timestamp(1_709_287_200, 0).unwrap();
        let stats = StubStats::new(now);
        let screens = Screens::new();
        let frames = ManualFrames::new();
        let spawner = QueueSpawner::new();
        let sink: Rc<dyn crate::services::DisplaySink> = Rc::new(screens.clone());
        let services = Services {
            fs: Rc::new(DirTable::portfolio()),
            content: Rc::new(StaticContent),
            navigator: Rc::new(RecordingNavigator::default()),
            stats: Rc::new(stats.clone()),
            clock: Rc::new(FixedClock(now)),
            sink: Rc::clone(&sink),
            typewriter: Typewriter::new(Rc::clone(&sink), Rc::new(frames.clone())),
            coordinator: AsyncCoordinator::new(
                Rc::new(spawner.clone()),
                Rc::new(IdleTimer),
                sink,
            ),
        };
        let copies = Rc::clone(&clipboard.copies);
        Fixture {
            terminal: Terminal::new(services, Rc::new(spawner.clone()), Rc::new(clipboard)),
            screens,
            frames,
            spawner,
            stats,
            copies,
        }
    }

    fn type_line(terminal: &mut Terminal, line: &str) -> Option<Dispatch> {
        for c in line.chars() {
            terminal.handle_key(KeyEvent::Char(c));
        }
        terminal.handle_key(KeyEvent::Enter)
    }

    #[tokio::test]
    async fn test_boot_counts_session_and_page_load() {
        let f = fixture(FakeClipboard::default());
        f.terminal.boot();
        assert_eq!(f.stats.sessions.get(), 1);
        assert!(f.terminal.services().typewriter.is_active());

        f.spawner.run_all().await;
        assert_eq!(f.stats.page_loads.get(), 1);

        f.frames.run_until_idle(1.0, 1_000_000);
        assert!(!f.screens.lines(Surface::Display).is_empty());
    }

    #[tokio::test]
    async fn test_submit_echoes_records_and_dispatches() {
        let mut f = fixture(FakeClipboard::default());
        let result = type_line(&mut f.terminal, "pwd");
        assert_eq!(result, Some(Dispatch::Handled("pwd")));
        assert_eq!(f.screens.lines(Surface::Input), vec!["$ pwd", "~"]);
        assert_eq!(f.stats.local_commands.get(), 1);

        f.spawner.run_all().await;
        assert_eq!(*f.stats.global_commands.borrow(), vec!["pwd"]);
    }

    #[test]
    fn test_blank_submit_is_echoed_but_not_recorded() {
        let mut f = fixture(FakeClipboard::default());
        assert_eq!(type_line(&mut f.terminal, "  "), Some(Dispatch::Empty));
        assert_eq!(f.screens.lines(Surface::Input), vec!["$ "]);
        assert_eq!(f.stats.local_commands.get(), 0);
        assert!(f.spawner.is_empty());
        assert!(f.terminal.history().is_empty());
    }

    #[test]
    fn test_session_changes_persist_across_lines() {
        let mut f = fixture(FakeClipboard::default());
        type_line(&mut f.terminal, "cd Contact");
        type_line(&mut f.terminal, "ps >>");
        assert_eq!(f.terminal.session().cwd, "~/Contact");
        assert_eq!(f.terminal.session().prompt, ">>");

        type_line(&mut f.terminal, "ls");
        let lines = f.screens.lines(Surface::Input);
        assert!(lines.contains(&">> ls".to_string()));
        assert!(lines.contains(&"  github".to_string()));
    }

    #[test]
    fn test_history_command_sees_current_line() {
        let mut f = fixture(FakeClipboard::default());
        type_line(&mut f.terminal, "clear");
        type_line(&mut f.terminal, "history");
        assert_eq!(
            f.screens.lines(Surface::Input),
            vec!["$ history", "  1  clear", "  2  history"]
        );
    }

    #[test]
    fn test_tab_completes_in_current_directory() {
        let mut f = fixture(FakeClipboard::default());
        type_line(&mut f.terminal, "cd Applications");
        for c in "cat xi".chars() {
            f.terminal.handle_key(KeyEvent::Char(c));
        }
        f.terminal.handle_key(KeyEvent::Tab);
        assert_eq!(f.terminal.buffer().before(), "cat xinu.c");
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let mut f = fixture(FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        });
        assert_eq!(f.terminal.handle_key(KeyEvent::Copy), None);

        let mut f2 = fixture(FakeClipboard::default());
        f2.terminal.handle_key(KeyEvent::Copy);
        assert_eq!(f2.copies.get(), 1);
        assert_eq!(f.copies.get(), 0);
    }
}
