//! Terminal output data types.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::BoundedBuffer;

/// One of the two output buffers of a terminal pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Read-only surface that animations and reports render into.
    Display,
    /// Interactive surface holding input echoes and command output.
    Input,
}

/// Lines shown on a surface, oldest first.
pub type OutputBuffer = BoundedBuffer<OutputLine>;

/// File classification used to colour listing entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Code,
    Image,
    Document,
    Archive,
    Executable,
    Plain,
}

/// Represents a single line of output with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    pub data: OutputLineData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echo of a submitted line with the prompt and directory at the time
    Command {
        prompt: String,
        cwd: String,
        input: String,
    },
    Text(String),
    /// Error message (red)
    Error(String),
    /// Progress and status message (yellow)
    Info(String),
    /// Directory listing entry
    ListEntry { name: String, kind: FileKind },
    Empty,
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(
        prompt: impl Into<String>,
        cwd: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            cwd: cwd.into(),
            input: input.into(),
        })
    }

    pub fn entry(name: impl Into<String>, kind: FileKind) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            kind,
        })
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// Plain-text rendering, as a copy-paste of the terminal would read.
    pub fn as_text(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input, .. } => format!("{prompt} {input}"),
            OutputLineData::Text(s) | OutputLineData::Error(s) | OutputLineData::Info(s) => {
                s.clone()
            }
            OutputLineData::ListEntry { name, .. } => format!("  {name}"),
            OutputLineData::Empty => String::new(),
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // IDs are unique per construction; equality is about content
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_ids_are_unique() {
        let a = OutputLine::text("a");
        let b = OutputLine::text("a");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(OutputLine::text("hi").as_text(), "hi");
        assert_eq!(OutputLine::command("$", "~", "ls").as_text(), "$ ls");
        assert_eq!(
            OutputLine::entry("chess.c", FileKind::Code).as_text(),
            "  chess.c"
        );
        assert_eq!(OutputLine::empty().as_text(), "");
    }
}
