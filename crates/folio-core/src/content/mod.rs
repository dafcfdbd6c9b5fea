//! Static file contents, external links and reference pages.

mod manual;
mod projects;

pub use manual::{MANUAL, ManPage, lookup_manual};
pub use projects::{PROJECTS, Project};

use crate::config::{HELP_TEXT, PROFILE_TEXT, RESUME_TEXT, SOURCE_URL, START_TEXT};

/// Lookup of revealable file contents and associated links.
pub trait ContentSource {
    /// Lines revealed by `cat`, if the file has any.
    fn content(&self, name: &str) -> Option<Vec<String>>;

    /// URL or `mailto:` address opened by `ln`.
    fn link(&self, name: &str) -> Option<String>;
}

const README_LINES: &[&str] = &[
    "voigniersmith.github.io",
    "",
    "A portfolio that behaves like a shell.",
    "Run 'ln README.md' to browse the source.",
];

const XINU_LINES: &[&str] = &[
    "Xinu",
    "",
    "Xinu Is Not Unix: the teaching operating system used",
    "throughout Purdue's systems courses.",
];

const LINKS: &[(&str, &str)] = &[
    ("gmail", "mailto:voigniersmith@gmail.com"),
    ("school_email", "mailto:smit3407@purdue.edu"),
    ("github", "https://github.com/voigniersmith"),
    ("linkedin", "https://www.linkedin.com/in/voigniersmith/"),
    ("instagram", "https://www.instagram.com/andrewnook4/"),
    ("README.md", SOURCE_URL),
    ("xinu.c", "https://xinu.cs.purdue.edu"),
    (
        "resume.txt",
        "https://docs.google.com/document/d/1EPNoUclm8Qs0Vbad_wvpiwvWjLRynip3JYSporWPdGM/edit?usp=sharing",
    ),
];

/// Content compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContent;

impl ContentSource for StaticContent {
    fn content(&self, name: &str) -> Option<Vec<String>> {
        if let Some(project) = PROJECTS.iter().find(|p| p.filename == name) {
            return Some(project.detail_lines());
        }
        let lines: Vec<String> = match name {
            "README.md" => README_LINES.iter().map(|s| s.to_string()).collect(),
            "xinu.c" => XINU_LINES.iter().map(|s| s.to_string()).collect(),
            "resume.txt" => text_lines(RESUME_TEXT),
            "help" => text_lines(HELP_TEXT),
            "start" => text_lines(START_TEXT),
            "whoami" => text_lines(PROFILE_TEXT),
            _ => return None,
        };
        Some(lines)
    }

    fn link(&self, name: &str) -> Option<String> {
        PROJECTS
            .iter()
            .find(|p| p.filename == name)
            .map(|p| p.repo_url)
            .or_else(|| LINKS.iter().find(|(n, _)| *n == name).map(|(_, url)| *url))
            .map(str::to_string)
    }
}

/// Splits a text asset into display lines.
pub fn text_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
