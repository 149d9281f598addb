//! Keeps the last trend snapshot and decides when to rebuild it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::analysis::{PipelineError, TrendSnapshot, TrendingItem, build_snapshot};
use crate::crawler::Crawler;

/// How long a successful snapshot is served before the next refresh.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3600);

struct CacheState {
    snapshot: TrendSnapshot,
    /// Time of the last refresh that produced real data. `None` until one succeeds.
    last_update: Option<Instant>,
}

impl CacheState {
    fn is_stale(&self, interval: Duration) -> bool {
        match self.last_update {
            Some(at) => at.elapsed() > interval,
            None => true,
        }
    }
}

/// Shared by every request handler.
///
/// The state lock is held for the whole refresh, so only one refresh runs at a time
/// and readers arriving meanwhile wait for its result.
pub struct TrendCache {
    crawler: Crawler,
    interval: Duration,
    state: Mutex<CacheState>,
    refreshes: AtomicU64,
}

impl TrendCache {
    pub fn new(crawler: Crawler, interval: Duration) -> Self {
        Self {
            crawler,
            interval,
            state: Mutex::new(CacheState {
                snapshot: TrendSnapshot::fallback(),
                last_update: None,
            }),
            refreshes: AtomicU64::new(0),
        }
    }

    /// Builds the first snapshot right away instead of on the first query.
    pub async fn warm(&self) {
        let mut state = self.state.lock().await;
        self.refresh(&mut state).await;
    }

    /// Current snapshot, refreshed first if it has gone stale.
    pub async fn snapshot(&self) -> TrendSnapshot {
        let mut state = self.state.lock().await;
        if state.is_stale(self.interval) {
            self.refresh(&mut state).await;
        }
        state.snapshot.clone()
    }

    pub async fn trending_items(&self) -> Vec<TrendingItem> {
        self.snapshot().await.trending_items
    }

    /// Category names and their parallel popularity scores.
    pub async fn categories(&self) -> (Vec<String>, Vec<u8>) {
        let TrendSnapshot { categories, popularity, .. } = self.snapshot().await;
        (categories, popularity)
    }

    /// Number of times the scrape pipeline has run.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }

    pub async fn run_pipeline(&self) -> Result<TrendSnapshot, PipelineError> {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        let crawl = self.crawler.crawl().await;
        build_snapshot(&crawl)
    }

    // A failed refresh leaves `last_update` alone, so the next query tries again.
    async fn refresh(&self, state: &mut CacheState) {
        let started = Instant::now();
        match self.run_pipeline().await {
            Ok(snapshot) => {
                info!(
                    items = snapshot.trending_items.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "trend snapshot refreshed"
                );
                state.snapshot = snapshot;
                state.last_update = Some(Instant::now());
            }
            Err(e) => {
                error!(error = %e, "trend refresh failed, serving fallback data");
                state.snapshot = TrendSnapshot::fallback();
            }
        }
    }
}
