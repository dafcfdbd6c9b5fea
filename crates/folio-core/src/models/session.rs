//! Per-terminal session state mutated by command executors.

use std::fmt;
use std::str::FromStr;

use crate::config::{DEFAULT_PROMPT, HOME_DIR};

/// Colour themes selectable with `theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
    Monokai,
    SolarizedDark,
    Gruvbox,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Dark,
        Theme::Light,
        Theme::Dracula,
        Theme::Nord,
        Theme::Monokai,
        Theme::SolarizedDark,
        Theme::Gruvbox,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Dracula => "dracula",
            Theme::Nord => "nord",
            Theme::Monokai => "monokai",
            Theme::SolarizedDark => "solarized-dark",
            Theme::Gruvbox => "gruvbox",
        }
    }

    /// Comma-separated list of every theme name.
    pub fn catalog() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Directory, prompt and theme of one terminal.
///
/// Only command executors write to this, on the turn that handles a
/// submitted line. Command history lives with the line editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub cwd: String,
    pub prompt: String,
    pub theme: Theme,
}

impl Session {
    pub fn new() -> Self {
        Self {
            cwd: HOME_DIR.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            theme: Theme::default(),
        }
    }

    /// Sets the prompt, falling back to the default when blank.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = if prompt.trim().is_empty() {
            DEFAULT_PROMPT.to_string()
        } else {
            prompt.to_string()
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
