//! Line editor state machine.
//!
//! The editor is a reducer over [`KeyEvent`]s: it owns the edit buffer,
//! the command history and any active completion cycle, and never touches
//! a UI. Hosts translate their own key events and render [`EditBuffer`].

mod completion;
mod history;

pub use completion::{CompletionContext, CompletionCycle};
pub use history::History;

use crate::config::CARET_PLACEHOLDER;
use crate::utils::char_len;

// ============================================================================
// Events
// ============================================================================

/// A discrete input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character.
    Char(char),
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Tab,
    Enter,
    /// Text read from the clipboard by the host.
    Paste(String),
    /// Request to copy the current selection.
    Copy,
}

/// What the host should do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Buffer may have changed; nothing else to do.
    Edited,
    /// A line was submitted and should be dispatched.
    Submitted(String),
    /// The host should copy the current selection.
    CopyRequested,
}

// ============================================================================
// Edit Buffer
// ============================================================================

/// The in-progress line split around the caret.
///
/// `caret` is the character under the cursor, or [`CARET_PLACEHOLDER`] at
/// the end of the line. `position` always equals the char length of
/// `before`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditBuffer {
    before: String,
    caret: char,
    after: String,
    position: usize,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self {
            before: String::new(),
            caret: CARET_PLACEHOLDER,
            after: String::new(),
            position: 0,
        }
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn caret(&self) -> char {
        self.caret
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The trimmed logical line.
    pub fn line(&self) -> String {
        let mut line = String::with_capacity(self.before.len() + self.after.len() + 1);
        line.push_str(&self.before);
        line.push(self.caret);
        line.push_str(&self.after);
        line.trim().to_string()
    }

    /// Replaces everything before the caret.
    fn set_before(&mut self, text: String) {
        self.position = char_len(&text);
        self.before = text;
    }

    /// Loads a recalled line with the caret at its end.
    fn load(&mut self, text: &str) {
        self.set_before(text.to_string());
        self.caret = CARET_PLACEHOLDER;
        self.after.clear();
    }

    fn insert(&mut self, text: &str) {
        self.before.push_str(text);
        self.position += char_len(text);
    }

    fn backspace(&mut self) {
        if self.before.pop().is_some() {
            self.position -= 1;
        }
    }

    fn move_left(&mut self) {
        if self.position == 0 {
            return;
        }
        let Some(prev) = self.before.pop() else {
            return;
        };
        self.after.insert(0, self.caret);
        self.caret = prev;
        self.position -= 1;
    }

    fn move_right(&mut self) {
        let end = self.position + char_len(&self.after);
        if self.after.is_empty() || self.position >= end {
            return;
        }
        let mut rest = self.after.chars();
        let Some(next) = rest.next() else {
            return;
        };
        self.after = rest.collect();
        self.before.push(self.caret);
        self.caret = next;
        self.position += 1;
    }
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Line Editor
// ============================================================================

/// Edit buffer, history and completion state of one terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: EditBuffer,
    history: History,
    completion: Option<CompletionCycle>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn completion(&self) -> Option<&CompletionCycle> {
        self.completion.as_ref()
    }

    /// Applies one event in place.
    pub fn apply(&mut self, event: KeyEvent, ctx: &CompletionContext<'_>) -> EditOutcome {
        match event {
            KeyEvent::Char(c) => {
                if !c.is_control() {
                    self.completion = None;
                    self.buffer.before.push(c);
                    self.buffer.position += 1;
                }
            }
            KeyEvent::Backspace => {
                self.completion = None;
                self.buffer.backspace();
            }
            KeyEvent::Left => self.buffer.move_left(),
            KeyEvent::Right => self.buffer.move_right(),
            KeyEvent::Up => {
                if let Some(line) = self.history.recall_older() {
                    self.completion = None;
                    self.buffer.load(line);
                }
            }
            KeyEvent::Down => {
                if let Some(line) = self.history.recall_newer() {
                    self.completion = None;
                    self.buffer.load(line);
                }
            }
            KeyEvent::Tab => self.complete(ctx),
            KeyEvent::Enter => return EditOutcome::Submitted(self.submit()),
            KeyEvent::Paste(text) => {
                self.completion = None;
                self.buffer.insert(&text);
            }
            KeyEvent::Copy => return EditOutcome::CopyRequested,
        }
        EditOutcome::Edited
    }

    fn complete(&mut self, ctx: &CompletionContext<'_>) {
        if let Some(cycle) = self.completion.as_mut() {
            cycle.advance();
            let text = cycle.render();
            self.buffer.set_before(text);
            return;
        }

        match CompletionCycle::start(&self.buffer.before, ctx) {
            Some(cycle) => {
                self.buffer.set_before(cycle.render());
                self.completion = Some(cycle);
            }
            None => self.completion = None,
        }
    }

    fn submit(&mut self) -> String {
        let line = self.buffer.line();
        if !line.is_empty() {
            self.history.push(line.clone());
        }
        self.completion = None;
        self.buffer = EditBuffer::new();
        line
    }
}

/// Pure form of [`LineEditor::apply`].
pub fn reduce(
    state: &LineEditor,
    event: KeyEvent,
    ctx: &CompletionContext<'_>,
) -> (LineEditor, EditOutcome) {
    let mut next = state.clone();
    let outcome = next.apply(event, ctx);
    (next, outcome)
}
