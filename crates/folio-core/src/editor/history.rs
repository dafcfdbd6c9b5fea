//! Submitted-command history with an up/down recall cursor.

/// Append-only list of submitted lines.
///
/// The cursor ranges over `0..=len`; `len` means "past the newest entry",
/// which is where it sits after every submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` and parks the cursor past it.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Steps toward older entries. `None` when history is empty.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps toward newer entries; stepping past the newest yields `""`.
    /// `None` when the cursor is already past the end.
    pub fn recall_newer(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries.get(self.cursor).map_or("", String::as_str))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(lines: &[&str]) -> History {
        let mut h = History::new();
        for line in lines {
            h.push(*line);
        }
        h
    }

    #[test]
    fn test_empty_history_recall() {
        let mut h = History::new();
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_newer(), None);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_recall_walks_back_and_clamps() {
        let mut h = history(&["a", "b", "c"]);
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.recall_older(), Some("c"));
        assert_eq!(h.recall_older(), Some("b"));
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn test_recall_newer_past_end_is_blank() {
        let mut h = history(&["a", "b"]);
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_newer(), Some("b"));
        assert_eq!(h.recall_newer(), Some(""));
        assert_eq!(h.recall_newer(), None);
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut h = history(&["a", "b"]);
        h.recall_older();
        h.recall_older();
        h.push("c");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.entries(), &["a", "b", "c"]);
    }
}
