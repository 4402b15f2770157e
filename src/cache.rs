//! In-memory caching using moka
//!
//! The landing page is a pure function of the calculator input triple and the
//! static configuration, so rendered pages are cached per triple. The contact
//! QR code never changes while the process runs.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::pricing::PricingInput;
use crate::routes::{contact, landing};
use crate::AppState;

/// Application cache holding rendered pages and QR images
#[derive(Clone)]
pub struct AppCache {
    /// Rendered landing pages (input key -> HTML)
    pub pages: Cache<String, Arc<String>>,
    /// Contact QR codes (payload -> PNG bytes)
    pub qr_codes: Cache<String, Arc<Vec<u8>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // One entry per (discipline, pages, urgency): 2 × 50 × 3
            pages: Cache::builder()
                .max_capacity(300)
                .time_to_live(Duration::from_secs(60 * 60))
                .time_to_idle(Duration::from_secs(20 * 60))
                .build(),

            // QR codes: a handful of payloads, long TTL
            qr_codes: Cache::builder()
                .max_capacity(8)
                .time_to_live(Duration::from_secs(24 * 60 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            pages_size: self.pages.entry_count(),
            qr_codes_size: self.qr_codes.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.pages.invalidate_all();
        self.qr_codes.invalidate_all();
        info!("All caches invalidated");
    }

    /// Generate cache key for a rendered landing page
    pub fn landing_key(input: &PricingInput) -> String {
        format!(
            "landing:{}:{}:{}",
            input.discipline.as_str(),
            input.pages,
            input.urgency.as_str()
        )
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub pages_size: u64,
    pub qr_codes_size: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every 30 minutes.
pub async fn start_cache_warmer(state: AppState) {
    let mut interval = interval(Duration::from_secs(30 * 60));
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&state).await;
    }
}

/// Warm the cache with the QR code and the default landing page
async fn warm_cache(state: &AppState) {
    info!("Starting cache warm-up...");

    if let Err(e) = contact::contact_qr_png(state).await {
        warn!("Failed to warm QR code cache: {}", e);
    }

    if let Err(e) = landing::cached_landing_page(state, PricingInput::default()).await {
        warn!("Failed to warm landing page cache: {}", e);
    }

    // moka applies pending writes lazily; flush so the stats are accurate
    state.cache.pages.run_pending_tasks().await;
    state.cache.qr_codes.run_pending_tasks().await;

    info!("Cache warm-up complete. Stats: {:?}", state.cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::pricing::{Discipline, Urgency};

    #[test]
    fn test_landing_key() {
        let input = PricingInput {
            discipline: Discipline::NonTechnical,
            pages: 12,
            urgency: Urgency::Rush48h,
        };
        assert_eq!(AppCache::landing_key(&input), "landing:non-tech:12:48h");
        assert_eq!(
            AppCache::landing_key(&PricingInput::default()),
            "landing:tech:5:1m"
        );
    }

    #[tokio::test]
    async fn test_warm_cache_fills_both_caches() {
        let state = AppState::new(AppConfig::default());
        warm_cache(&state).await;

        let stats = state.cache.stats();
        assert_eq!(stats.pages_size, 1);
        assert_eq!(stats.qr_codes_size, 1);

        let key = AppCache::landing_key(&PricingInput::default());
        assert!(state.cache.pages.get(&key).await.is_some());

        state.cache.invalidate_all();
        assert!(state.cache.pages.get(&key).await.is_none());
    }
}
