//! GitHub and remote counter clients plus the local visitor log.

use folio_core::config::{COUNTER_STORE_URL, github};
use folio_core::error::ServiceError;
use folio_core::services::{
    Clock, GlobalStats, LocalBoxFuture, RepoStats, RepoStatsCache, StatsService, SystemClock,
    VisitorLog, VisitorStats, command_increment, page_load_increment,
};
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

use super::LocalStorage;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

// =============================================================================
// HTTP Helpers
// =============================================================================

async fn send(request: RequestBuilder) -> Result<String, ServiceError> {
    let response = request
        .send()
        .await
        .map_err(|error| ServiceError::Network(error.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::Status {
            status: response.status(),
        });
    }
    response
        .text()
        .await
        .map_err(|error| ServiceError::Network(error.to_string()))
}

fn counter_url(base: &str) -> String {
    format!("{}/stats.json", base.trim_end_matches('/'))
}

async fn fetch_repo_stats() -> Result<RepoStats, ServiceError> {
    let url = format!("{}/repos/{}/{}", github::API_BASE, github::OWNER, github::REPO);
    let body = send(Request::get(&url).header("Accept", GITHUB_ACCEPT)).await?;
    RepoStats::from_github_json(&body)
}

async fn fetch_global_stats() -> Result<Option<GlobalStats>, ServiceError> {
    let base = COUNTER_STORE_URL.ok_or(ServiceError::NotConfigured)?;
    let body = send(Request::get(&counter_url(base))).await?;
    GlobalStats::from_counter_json(&body)
}

/// Applies a server-side increment to the counter record.
async fn patch_counters(body: Value) -> Result<(), ServiceError> {
    let base = COUNTER_STORE_URL.ok_or(ServiceError::NotConfigured)?;
    let response = Request::patch(&counter_url(base))
        .json(&body)
        .map_err(|error| ServiceError::Decode(error.to_string()))?
        .send()
        .await
        .map_err(|error| ServiceError::Network(error.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(ServiceError::Status {
            status: response.status(),
        })
    }
}

fn log_counter_failure(error: ServiceError) {
    match error {
        ServiceError::NotConfigured => tracing::debug!("counter store not configured"),
        error => tracing::warn!(%error, "failed to update global counters"),
    }
}

// =============================================================================
// WebStats
// =============================================================================

/// Stats service for the deployed site.
#[derive(Clone)]
pub struct WebStats {
    visitors: VisitorLog<LocalStorage>,
    cache: RepoStatsCache<LocalStorage>,
    clock: SystemClock,
}

impl WebStats {
    pub fn new() -> Self {
        Self {
            visitors: VisitorLog::new(LocalStorage),
            cache: RepoStatsCache::new(LocalStorage),
            clock: SystemClock,
        }
    }
}

impl Default for WebStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsService for WebStats {
    fn repo_stats(&self) -> LocalBoxFuture<'static, Option<RepoStats>> {
        let cache = self.cache.clone();
        let now_ms = self.clock.now().timestamp_millis();
        Box::pin(async move {
            if let Some(stats) = cache.get_fresh(now_ms) {
                tracing::debug!("repository stats served from cache");
                return Some(stats);
            }
            match fetch_repo_stats().await {
                Ok(stats) => {
                    cache.put(&stats, now_ms);
                    Some(stats)
                }
                Err(error) => {
                    tracing::warn!(%error, "repository stats unavailable");
                    None
                }
            }
        })
    }

    fn global_stats(&self) -> LocalBoxFuture<'static, Option<GlobalStats>> {
        Box::pin(async {
            match fetch_global_stats().await {
                Ok(stats) => stats,
                Err(ServiceError::NotConfigured) => None,
                Err(error) => {
                    tracing::warn!(%error, "global stats unavailable");
                    None
                }
            }
        })
    }

    fn visitor_stats(&self) -> VisitorStats {
        self.visitors.current(self.clock.now())
    }

    fn begin_session(&self) {
        let stats = self.visitors.begin_session(self.clock.now());
        tracing::debug!(sessions = stats.total_sessions, "visitor session started");
    }

    fn record_command_locally(&self) {
        self.visitors.record_command(self.clock.now());
    }

    fn record_command_globally(&self, name: &str) -> LocalBoxFuture<'static, ()> {
        let body = command_increment(name);
        Box::pin(async move {
            let Some(body) = body else { return };
            if let Err(error) = patch_counters(body).await {
                log_counter_failure(error);
            }
        })
    }

    fn record_page_load_globally(&self) -> LocalBoxFuture<'static, ()> {
        Box::pin(async {
            if let Err(error) = patch_counters(page_load_increment()).await {
                log_counter_failure(error);
            }
        })
    }
}
