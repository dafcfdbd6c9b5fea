//! Statistics records and their wire formats.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ServiceError;

// ============================================================================
// Repository
// ============================================================================

/// Public counters of the site's source repository.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
    pub last_update: DateTime<Utc>,
    pub url: String,
    pub language: Option<String>,
}

#[derive(Deserialize)]
struct GithubRepo {
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    open_issues_count: u64,
    #[serde(default)]
    watchers_count: u64,
    updated_at: DateTime<Utc>,
    html_url: String,
    language: Option<String>,
}

impl RepoStats {
    /// Decodes a GitHub `GET /repos/{owner}/{repo}` response body.
    pub fn from_github_json(body: &str) -> Result<Self, ServiceError> {
        let repo: GithubRepo = serde_json::from_str(body)?;
        Ok(Self {
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            watchers: repo.watchers_count,
            last_update: repo.updated_at,
            url: repo.html_url,
            language: repo.language,
        })
    }
}

// ============================================================================
// Global Counters
// ============================================================================

/// Aggregate counters kept in the remote store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobalStats {
    pub total_page_loads: u64,
    pub total_commands: u64,
    pub last_page_load: Option<DateTime<Utc>>,
    pub commands: BTreeMap<String, u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CounterRecord {
    #[serde(default)]
    total_page_loads: u64,
    #[serde(default)]
    total_commands: u64,
    #[serde(default)]
    last_page_load: Option<i64>,
    #[serde(default)]
    commands: BTreeMap<String, u64>,
}

impl GlobalStats {
    /// Decodes the counter record; a `null` body means nothing was
    /// recorded yet.
    pub fn from_counter_json(body: &str) -> Result<Option<Self>, ServiceError> {
        let record: Option<CounterRecord> = serde_json::from_str(body)?;
        Ok(record.map(|r| Self {
            total_page_loads: r.total_page_loads,
            total_commands: r.total_commands,
            last_page_load: r.last_page_load.and_then(DateTime::from_timestamp_millis),
            commands: r.commands,
        }))
    }

    /// The `n` most used commands, highest count first, ties by name.
    pub fn top_commands(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .commands
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

fn increment() -> Value {
    json!({ ".sv": { "increment": 1 } })
}

/// Counter key for a submitted line: its first word, lowercased, with
/// characters the store rejects in keys replaced.
pub fn command_key(input: &str) -> Option<String> {
    let word = input.split_whitespace().next()?.to_lowercase();
    Some(
        word.chars()
            .map(|c| if matches!(c, '.' | '$' | '#' | '[' | ']' | '/') { '_' } else { c })
            .collect(),
    )
}

/// Multi-path update body counting one command.
pub fn command_increment(input: &str) -> Option<Value> {
    let key = command_key(input)?;
    let mut body = serde_json::Map::new();
    body.insert("totalCommands".into(), increment());
    body.insert(format!("commands/{key}"), increment());
    Some(Value::Object(body))
}

/// Multi-path update body counting one page load.
pub fn page_load_increment() -> Value {
    json!({
        "totalPageLoads": increment(),
        "lastPageLoad": { ".sv": "timestamp" },
    })
}

// ============================================================================
// Visitor
// ============================================================================

/// Counters kept in this browser's local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorStats {
    pub total_visitors: u64,
    pub total_sessions: u64,
    pub commands_executed: u64,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
}

impl VisitorStats {
    /// The record for a first visit at `now`.
    pub fn first_visit(now: DateTime<Utc>) -> Self {
        Self {
            total_visitors: 1,
            total_sessions: 1,
            commands_executed: 0,
            first_visit: now,
            last_visit: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITHUB_BODY: &str = r#"{
        "stargazers_count": 12,
        "forks_count": 3,
        "open_issues_count": 1,
        "watchers_count": 12,
        "updated_at": "2024-03-01T10:00:00Z",
        "html_url": "https://github.com/voigniersmith/voigniersmith.github.io",
        "language": "TypeScript",
        "private": false
    }"#;

    #[test]
    fn test_repo_stats_from_github_json() {
        let stats = RepoStats::from_github_json(GITHUB_BODY).unwrap();
        assert_eq!(stats.stars, 12);
        assert_eq!(stats.forks, 3);
        assert_eq!(stats.language.as_deref(), Some("TypeScript"));
        assert_eq!(stats.last_update.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn test_repo_stats_rejects_garbage() {
        assert!(matches!(
            RepoStats::from_github_json("{\"message\": \"rate limited\"}"),
            Err(ServiceError::Decode(_))
        ));
    }

    #[test]
    fn test_global_stats_from_counter_json() {
        let body = r#"{"totalPageLoads": 40, "totalCommands": 9,
            "lastPageLoad": 1709287200000, "commands": {"ls": 5, "cat": 4}}"#;
        let stats = GlobalStats::from_counter_json(body).unwrap().unwrap();
        assert_eq!(stats.total_page_loads, 40);
        assert_eq!(stats.commands["ls"], 5);
        assert_eq!(
            stats.last_page_load.map(|d| d.timestamp()),
            Some(1_709_287_200)
        );
    }

    #[test]
    fn test_global_stats_null_body() {
        assert_eq!(GlobalStats::from_counter_json("null").unwrap(), None);
    }

    #[test]
    fn test_top_commands_order() {
        let stats = GlobalStats {
            commands: [("ls", 3), ("cat", 7), ("cd", 3), ("pwd", 1)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ..Default::default()
        };
        assert_eq!(stats.top_commands(3), vec![("cat", 7), ("cd", 3), ("ls", 3)]);
    }

    #[test]
    fn test_command_key() {
        assert_eq!(command_key("LS ~/Applications").as_deref(), Some("ls"));
        assert_eq!(command_key("cat.txt").as_deref(), Some("cat_txt"));
        assert_eq!(command_key("   "), None);
    }

    #[test]
    fn test_command_increment_body() {
        let body = command_increment("theme dark").unwrap();
        assert_eq!(body["commands/theme"][".sv"]["increment"], 1);
        assert_eq!(body["totalCommands"][".sv"]["increment"], 1);
    }

    #[test]
    fn test_visitor_stats_camel_case() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let json = serde_json::to_value(VisitorStats::first_visit(now)).unwrap();
        assert_eq!(json["totalSessions"], 1);
        assert_eq!(json["commandsExecuted"], 0);
        assert!(json["firstVisit"].is_string());
    }
}
