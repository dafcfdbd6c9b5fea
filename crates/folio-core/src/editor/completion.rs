//! Tab-completion cycling.

use crate::filesystem::DirTable;

/// What the editor needs to compute completions.
#[derive(Clone, Copy)]
pub struct CompletionContext<'a> {
    /// Known command names in declared order.
    pub commands: &'a [&'a str],
    pub fs: &'a DirTable,
    pub cwd: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Target {
    /// Completing the command name itself.
    Command,
    /// Completing the argument that follows `command `.
    Argument { command: String },
}

/// Candidates from the first Tab press and the one currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionCycle {
    target: Target,
    candidates: Vec<String>,
    index: usize,
}

impl CompletionCycle {
    /// Computes candidates for `text`, or `None` if nothing matches.
    ///
    /// Text without a space completes a command name; otherwise the part
    /// after the first space completes a child of the current directory.
    /// Matching is a case-insensitive prefix test in declared order.
    pub fn start(text: &str, ctx: &CompletionContext<'_>) -> Option<Self> {
        let (target, candidates) = match text.split_once(' ') {
            None => {
                let prefix = text.to_lowercase();
                let names = ctx
                    .commands
                    .iter()
                    .filter(|name| name.to_lowercase().starts_with(&prefix))
                    .map(|name| name.to_string())
                    .collect::<Vec<_>>();
                (Target::Command, names)
            }
            Some((command, partial)) => (
                Target::Argument {
                    command: command.to_string(),
                },
                ctx.fs.complete(ctx.cwd, partial),
            ),
        };

        (!candidates.is_empty()).then_some(Self {
            target,
            candidates,
            index: 0,
        })
    }

    /// Moves to the next candidate, wrapping around.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.candidates.len();
    }

    /// The text that replaces everything before the caret.
    pub fn render(&self) -> String {
        let candidate = &self.candidates[self.index];
        match &self.target {
            Target::Command => candidate.clone(),
            Target::Argument { command } => format!("{command} {candidate}"),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
