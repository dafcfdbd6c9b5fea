//! Virtual filesystem table.
//!
//! An immutable map from directory paths to their ordered child names.
//! Paths are rooted at [`HOME_DIR`] and nested with `/`; only directories
//! have entries, files are just names in a parent's list.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::HOME_DIR;
use crate::models::FileKind;

const DEFAULT_TABLE: &[(&str, &[&str])] = &[
    ("~", &["Applications", "Contact", "README.md", "resume.txt"]),
    (
        "~/Applications",
        &[
            "bugdetect.java",
            "chess.c",
            "cryptocalc.py",
            "moodify.js",
            "mymalloc.c",
            "omilia.js",
            "paging.c",
            "ppps.cpp",
            "shell.cpp",
            "voigniersmith.js",
            "xinu.c",
        ],
    ),
    (
        "~/Contact",
        &["github", "gmail", "instagram", "linkedin", "school_email"],
    ),
];

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(c|cpp|h|hpp|java|js|jsx|ts|tsx|py|rs|go|rb|php|cs|swift)$")
        .expect("valid regex")
});
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpe?g|png|gif|bmp|svg|webp)$").expect("valid regex"));
static DOCUMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(md|txt|docx?|pdf)$").expect("valid regex"));
static ARCHIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(zip|tar|gz|rar|7z)$").expect("valid regex"));
static EXECUTABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(exe|sh|bat|app)$").expect("valid regex"));

/// Path-to-children lookup table.
#[derive(Clone, Debug)]
pub struct DirTable {
    dirs: HashMap<String, Vec<String>>,
}

impl DirTable {
    /// Builds a table from `(path, children)` pairs.
    pub fn from_entries<P, I, N>(entries: impl IntoIterator<Item = (P, I)>) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let dirs = entries
            .into_iter()
            .map(|(path, children)| {
                (path.into(), children.into_iter().map(Into::into).collect())
            })
            .collect();
        Self { dirs }
    }

    /// The portfolio's directory layout.
    pub fn portfolio() -> Self {
        Self::from_entries(
            DEFAULT_TABLE
                .iter()
                .map(|(path, children)| (*path, children.iter().copied())),
        )
    }

    /// Ordered children of `path`, or `None` if it is not a directory.
    pub fn list_children(&self, path: &str) -> Option<&[String]> {
        self.dirs.get(path).map(Vec::as_slice)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Case-sensitive membership test.
    pub fn child_exists(&self, path: &str, name: &str) -> bool {
        self.list_children(path)
            .is_some_and(|children| children.iter().any(|c| c == name))
    }

    /// Children of `path` whose lowercase name starts with the lowercase
    /// `prefix`, in table order.
    pub fn complete(&self, path: &str, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.list_children(path)
            .unwrap_or_default()
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Resolves a command argument against `cwd`.
    ///
    /// Empty and `.` mean `cwd`; a leading `~` is absolute; anything else
    /// is joined onto `cwd`.
    pub fn resolve(cwd: &str, arg: &str) -> String {
        match arg {
            "" | "." | "./" => cwd.to_string(),
            _ if arg.starts_with(HOME_DIR) => arg.to_string(),
            _ => join(cwd, arg),
        }
    }

    /// Classifies `name` as listed under `dir`.
    pub fn file_kind(&self, dir: &str, name: &str) -> FileKind {
        if name == "." || name == ".." || self.is_directory(&join(dir, name)) {
            FileKind::Directory
        } else {
            classify(name)
        }
    }
}

impl Default for DirTable {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Joins a child name onto a directory path.
pub fn join(dir: &str, name: &str) -> String {
    if dir == HOME_DIR {
        format!("{HOME_DIR}/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Classifies a file by its extension.
pub fn classify(name: &str) -> FileKind {
    if CODE_RE.is_match(name) {
        FileKind::Code
    } else if IMAGE_RE.is_match(name) {
        FileKind::Image
    } else if DOCUMENT_RE.is_match(name) {
        FileKind::Document
    } else if ARCHIVE_RE.is_match(name) {
        FileKind::Archive
    } else if EXECUTABLE_RE.is_match(name) {
        FileKind::Executable
    } else {
        FileKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DirTable {
        DirTable::from_entries([
            ("~", vec!["docs", "README.md", "notes.txt"]),
            ("~/docs", vec!["a.c", "b.py"]),
        ])
    }

    #[test]
    fn test_list_children() {
        let t = table();
        assert_eq!(
            t.list_children("~"),
            Some(&["docs".to_string(), "README.md".into(), "notes.txt".into()][..])
        );
        assert_eq!(t.list_children("~/missing"), None);
    }

    #[test]
    fn test_is_directory() {
        let t = table();
        assert!(t.is_directory("~/docs"));
        assert!(!t.is_directory("~/README.md"));
    }

    #[test]
    fn test_child_exists_case_sensitive() {
        let t = table();
        assert!(t.child_exists("~", "README.md"));
        assert!(!t.child_exists("~", "readme.md"));
        assert!(!t.child_exists("~/nowhere", "a.c"));
    }

    #[test]
    fn test_complete_case_insensitive_prefix() {
        let t = table();
        assert_eq!(t.complete("~", "re"), vec!["README.md".to_string()]);
        assert_eq!(t.complete("~", ""), vec!["docs", "README.md", "notes.txt"]);
        assert!(t.complete("~/nowhere", "a").is_empty());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(DirTable::resolve("~", ""), "~");
        assert_eq!(DirTable::resolve("~/docs", "."), "~/docs");
        assert_eq!(DirTable::resolve("~/docs", "./"), "~/docs");
        assert_eq!(DirTable::resolve("~/docs", "~/other"), "~/other");
        assert_eq!(DirTable::resolve("~", "docs"), "~/docs");
        assert_eq!(DirTable::resolve("~/docs", "deep"), "~/docs/deep");
    }

    #[test]
    fn test_file_kind() {
        let t = table();
        assert_eq!(t.file_kind("~", "docs"), FileKind::Directory);
        assert_eq!(t.file_kind("~", ".."), FileKind::Directory);
        assert_eq!(t.file_kind("~", "README.md"), FileKind::Document);
        assert_eq!(classify("main.CPP"), FileKind::Code);
        assert_eq!(classify("photo.jpeg"), FileKind::Image);
        assert_eq!(classify("bundle.tar"), FileKind::Archive);
        assert_eq!(classify("run.sh"), FileKind::Executable);
        assert_eq!(classify("github"), FileKind::Plain);
    }

    #[test]
    fn test_portfolio_directories_exist() {
        let t = DirTable::portfolio();
        for child in t.list_children("~").unwrap() {
            let path = join("~", child);
            if child.contains('.') {
                assert!(!t.is_directory(&path));
            } else {
                assert!(t.is_directory(&path), "{path} should be a directory");
            }
        }
    }
}
