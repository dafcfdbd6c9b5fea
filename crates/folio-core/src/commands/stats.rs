//! Repository, visitor and global usage reports.

use chrono::{DateTime, Local, TimeZone, Utc};

use super::{CommandEnv, CommandSpec, is};
use crate::config::{COUNTER_STORE_URL, github, speed};
use crate::error::ServiceError;
use crate::models::{OutputBuffer, OutputLine, Surface};
use crate::services::{GlobalStats, RepoStats, VisitorStats};

const BORDER: &str = "═════════════════════════════════════════";
const TOP_COMMANDS: usize = 10;

pub(super) fn commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "global-stats",
            description: "show aggregate visitor statistics",
            matches: |input| is(input, "global-stats"),
            execute: global_stats,
        },
        CommandSpec {
            name: "stats",
            description: "show your personal session statistics",
            matches: |input| is(input, "stats"),
            execute: stats,
        },
    ]
}

fn global_stats(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    const PROGRESS: &str = "fetching global statistics...";
    out.push(OutputLine::info(PROGRESS));

    let services = env.services;
    let stats = services.stats.clone();
    let typewriter = services.typewriter.clone();
    let sink = services.sink.clone();
    let now = services.clock.now();
    services.coordinator.run(
        "global-stats",
        PROGRESS,
        move || {
            let fetch = stats.global_stats();
            async move { Ok::<_, ServiceError>(fetch.await) }
        },
        move |global: Option<GlobalStats>| global_report(global.as_ref(), now),
        move |lines| {
            typewriter.stop();
            sink.replace_all(Surface::Display, lines.into_iter().map(OutputLine::text).collect());
        },
    );
}

fn stats(_input: &str, out: &mut OutputBuffer, env: &mut CommandEnv<'_>) {
    const PROGRESS: &str = "fetching statistics...";
    out.push(OutputLine::empty());
    out.extend(banner("PORTFOLIO STATISTICS", 10).into_iter().map(OutputLine::text));
    out.push(OutputLine::info(PROGRESS));

    let services = env.services;
    let stats = services.stats.clone();
    let now = services.clock.now();
    let typewriter = services.typewriter.clone();
    services.coordinator.run(
        "stats",
        PROGRESS,
        move || {
            let fetch = stats.repo_stats();
            async move {
                let repo = fetch.await;
                Ok::<_, ServiceError>((repo, stats.visitor_stats()))
            }
        },
        move |(repo, visitor): (Option<RepoStats>, VisitorStats)| {
            stats_report(repo.as_ref(), &visitor, now)
        },
        move |lines| typewriter.reveal(lines, speed::FAST),
    );
}

// ============================================================================
// Reports
// ============================================================================

fn banner(title: &str, indent: usize) -> Vec<String> {
    vec![
        BORDER.to_string(),
        format!("{:indent$}{title}", ""),
        BORDER.to_string(),
        String::new(),
    ]
}

/// Personal report: repository block followed by this browser's counters.
pub fn stats_report(
    repo: Option<&RepoStats>,
    visitor: &VisitorStats,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(banner("PORTFOLIO STATISTICS", 10));

    match repo {
        Some(repo) => {
            lines.push(format!("GitHub Repository ({})", github::REPO));
            lines.push(format!("  Stars:        {}", repo.stars));
            lines.push(format!("  Forks:        {}", repo.forks));
            lines.push(format!("  Watchers:     {}", repo.watchers));
            lines.push(format!("  Open Issues:  {}", repo.open_issues));
            lines.push(format!(
                "  Language:     {}",
                repo.language.as_deref().unwrap_or("unknown")
            ));
            lines.push(format!(
                "  Last Update:  {}",
                relative_date(repo.last_update, now)
            ));
        }
        None => lines.push("(GitHub stats unavailable)".to_string()),
    }
    lines.push(String::new());

    lines.push("Visitor Statistics".to_string());
    lines.push(format!("  Total Sessions:      {}", visitor.total_sessions));
    lines.push(format!("  Commands Executed:   {}", visitor.commands_executed));
    lines.push(format!(
        "  First Visit:         {}",
        format_timestamp(&visitor.first_visit.with_timezone(&Local))
    ));
    lines.push(format!(
        "  Last Visit:          {}",
        format_timestamp(&visitor.last_visit.with_timezone(&Local))
    ));
    lines.push(String::new());
    lines.push(BORDER.to_string());
    lines.push(String::new());
    lines
}

/// Aggregate report across all visitors, or a notice when the counter
/// store is unreachable or unconfigured.
pub fn global_report(global: Option<&GlobalStats>, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(banner("GLOBAL PORTFOLIO STATISTICS", 6));

    match global {
        Some(global) => {
            lines.push("Overall Usage".to_string());
            lines.push(format!("  Total Page Loads:     {}", global.total_page_loads));
            lines.push(format!("  Total Commands:       {}", global.total_commands));
            let last = global
                .last_page_load
                .map_or_else(|| "Never".to_string(), |at| relative_date(at, now));
            lines.push(format!("  Last Page Load:       {last}"));
            lines.push(String::new());

            let top = global.top_commands(TOP_COMMANDS);
            if !top.is_empty() {
                lines.push("Most Used Commands".to_string());
                lines.extend(top.into_iter().map(|(name, count)| format!("  {name}: {count}")));
                lines.push(String::new());
            }
        }
        None => {
            lines.push("No global stats available yet.".to_string());
            if COUNTER_STORE_URL.is_none() {
                lines.push("Set FOLIO_COUNTER_URL at build time to enable them.".to_string());
            }
            lines.push(String::new());
        }
    }

    lines.push(BORDER.to_string());
    lines.push(String::new());
    lines
}

/// Coarse age of `date`: Today, Yesterday, days, weeks, then months.
pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => plural(days / 7, "week"),
        _ => plural(days / 30, "month"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}
