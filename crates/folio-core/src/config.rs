//! Application configuration.
//!
//! Centralizes the constants shared by the core and the web shell.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome banner revealed on boot and by `start`.
pub const START_TEXT: &str = include_str!("../assets/text/start.txt");

/// Help page revealed by `help`.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Profile card revealed by `whoami`.
pub const PROFILE_TEXT: &str = include_str!("../assets/text/profile.txt");

/// Resume summary behind `resume.txt`.
pub const RESUME_TEXT: &str = include_str!("../assets/text/resume.txt");

// =============================================================================
// Session Defaults
// =============================================================================

/// Root of the virtual filesystem.
pub const HOME_DIR: &str = "~";

/// Prompt shown until `ps` changes it.
pub const DEFAULT_PROMPT: &str = "$";

/// Maximum lines retained per output surface.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Blank shown at the caret when it sits past the last character.
pub const CARET_PLACEHOLDER: char = ' ';

// =============================================================================
// Animation
// =============================================================================

/// Reveal rates in units per second.
pub mod speed {
    pub const FAST: f64 = 1000.0;
    pub const NORMAL: f64 = 500.0;
    pub const MEDIUM: f64 = 100.0;
}

// =============================================================================
// Async Commands
// =============================================================================

/// Braille frames cycled while an async command is in flight.
pub const SPINNER_FRAMES: [&str; 10] = [
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

/// Delay between spinner frames in milliseconds.
pub const SPINNER_INTERVAL_MS: u32 = 100;

// =============================================================================
// Persistence
// =============================================================================

/// localStorage keys.
pub mod storage_keys {
    pub const VISITOR_STATS: &str = "visitor_stats";
    pub const REPO_STATS_CACHE: &str = "github_stats_cache";
}

/// Lifetime of a cached repository stats entry.
pub const REPO_STATS_TTL_MS: i64 = 60 * 60 * 1000;

// =============================================================================
// External Services
// =============================================================================

pub mod github {
    pub const API_BASE: &str = "https://api.github.com";
    pub const OWNER: &str = "voigniersmith";
    pub const REPO: &str = "voigniersmith.github.io";
}

/// Base URL of the remote counter store, provided at build time.
///
/// Global stats are unavailable when this is unset.
pub const COUNTER_STORE_URL: Option<&str> = option_env!("FOLIO_COUNTER_URL");

/// Opened by `view-source`.
pub const SOURCE_URL: &str = "https://github.com/voigniersmith/voigniersmith.github.io";

/// Opened by `view-react-docs`.
pub const REACT_DOCS_URL: &str = "https://react.dev";
