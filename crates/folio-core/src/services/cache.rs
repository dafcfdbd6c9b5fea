//! Time-bounded cache of repository stats.

use serde::{Deserialize, Serialize};

use super::{RepoStats, Storage};
use crate::config::REPO_STATS_TTL_MS;
use crate::config::storage_keys::REPO_STATS_CACHE;

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    data: RepoStats,
    /// Unix milliseconds when the entry was written.
    timestamp: i64,
}

/// Repository stats cached in [`Storage`] for [`REPO_STATS_TTL_MS`].
#[derive(Clone, Debug)]
pub struct RepoStatsCache<S> {
    storage: S,
}

impl<S: Storage> RepoStatsCache<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The cached stats if written less than the TTL before `now_ms`.
    pub fn get_fresh(&self, now_ms: i64) -> Option<RepoStats> {
        let raw = self.storage.get(REPO_STATS_CACHE)?;
        let entry: CacheEntry = serde_json::from_str(&raw).ok()?;
        (now_ms - entry.timestamp < REPO_STATS_TTL_MS).then_some(entry.data)
    }

    pub fn put(&self, stats: &RepoStats, now_ms: i64) {
        let entry = CacheEntry {
            data: stats.clone(),
            timestamp: now_ms,
        };
        let result = serde_json::to_string(&entry)
            .map_err(|err| err.to_string())
            .and_then(|json| {
                self.storage
                    .set(REPO_STATS_CACHE, &json)
                    .map_err(|err| err.to_string())
            });
        if let Err(error) = result {
            tracing::warn!(%error, "failed to cache repository stats");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::testing::MemoryStorage;

    fn stats() -> RepoStats {
        RepoStats {
            stars: 4,
            forks: 1,
            open_issues: 0,
            watchers: 4,
            last_update: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            url: "https://github.com/example/site".into(),
            language: None,
        }
    }

    #[test]
    fn test_fresh_entry_is_served() {
        let cache = RepoStatsCache::new(MemoryStorage::new());
        cache.put(&stats(), 1_000);
        assert_eq!(cache.get_fresh(1_000 + REPO_STATS_TTL_MS - 1), Some(stats()));
    }

    #[test]
    fn test_stale_entry_is_ignored() {
        let cache = RepoStatsCache::new(MemoryStorage::new());
        cache.put(&stats(), 1_000);
        assert_eq!(cache.get_fresh(1_000 + REPO_STATS_TTL_MS), None);
    }

    #[test]
    fn test_missing_or_corrupt_entry() {
        let storage = MemoryStorage::new();
        let cache = RepoStatsCache::new(storage.clone());
        assert_eq!(cache.get_fresh(0), None);
        storage.set(REPO_STATS_CACHE, "[]").unwrap();
        assert_eq!(cache.get_fresh(0), None);
    }
}
