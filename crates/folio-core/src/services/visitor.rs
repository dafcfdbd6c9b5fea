//! Local visitor counters.

use chrono::{DateTime, Utc};

use super::{Storage, VisitorStats};
use crate::config::storage_keys::VISITOR_STATS;

/// Reads and updates the visitor record in [`Storage`].
///
/// Unreadable records are treated as absent and write failures are
/// logged, so callers always get a usable value.
#[derive(Clone, Debug)]
pub struct VisitorLog<S> {
    storage: S,
}

impl<S: Storage> VisitorLog<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Option<VisitorStats> {
        let raw = self.storage.get(VISITOR_STATS)?;
        match serde_json::from_str(&raw) {
            Ok(stats) => Some(stats),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable visitor stats");
                None
            }
        }
    }

    /// Stored stats, or a first-visit record that is not persisted.
    pub fn current(&self, now: DateTime<Utc>) -> VisitorStats {
        self.load().unwrap_or_else(|| VisitorStats::first_visit(now))
    }

    /// Counts a new session.
    pub fn begin_session(&self, now: DateTime<Utc>) -> VisitorStats {
        let stats = match self.load() {
            Some(mut stats) => {
                stats.total_sessions += 1;
                stats.last_visit = now;
                stats
            }
            None => VisitorStats::first_visit(now),
        };
        self.save(&stats);
        stats
    }

    /// Counts one executed command.
    pub fn record_command(&self, now: DateTime<Utc>) -> VisitorStats {
        let mut stats = self.current(now);
        stats.commands_executed += 1;
        stats.last_visit = now;
        self.save(&stats);
        stats
    }

    fn save(&self, stats: &VisitorStats) {
        let result = serde_json::to_string(stats)
            .map_err(|err| err.to_string())
            .and_then(|json| {
                self.storage
                    .set(VISITOR_STATS, &json)
                    .map_err(|err| err.to_string())
            });
        if let Err(error) = result {
            tracing::warn!(%error, "failed to persist visitor stats");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStorage;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_first_session_creates_record() {
        let log = VisitorLog::new(MemoryStorage::new());
        let stats = log.begin_session(at(100));
        assert_eq!(stats.total_visitors, 1);
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(log.load(), Some(stats));
    }

    #[test]
    fn test_later_sessions_increment() {
        let log = VisitorLog::new(MemoryStorage::new());
        log.begin_session(at(100));
        let stats = log.begin_session(at(200));
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.first_visit, at(100));
        assert_eq!(stats.last_visit, at(200));
    }

    #[test]
    fn test_record_command() {
        let log = VisitorLog::new(MemoryStorage::new());
        log.begin_session(at(100));
        log.record_command(at(150));
        let stats = log.record_command(at(160));
        assert_eq!(stats.commands_executed, 2);
        assert_eq!(log.current(at(999)).last_visit, at(160));
    }

    #[test]
    fn test_corrupt_record_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(VISITOR_STATS, "{not json").unwrap();
        let log = VisitorLog::new(storage);
        assert_eq!(log.load(), None);
        assert_eq!(log.current(at(5)), VisitorStats::first_visit(at(5)));
    }

    #[test]
    fn test_write_failure_still_returns_stats() {
        let log = VisitorLog::new(MemoryStorage::read_only());
        let stats = log.record_command(at(10));
        assert_eq!(stats.commands_executed, 1);
        assert_eq!(log.load(), None);
    }
}
