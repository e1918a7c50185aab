// ABOUTME: In-memory result cache with TTL-checked reads and a background expiry sweep
// ABOUTME: Sharded map store; values are stored serialized so any serde type can be cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheConfig, CacheKey, CacheStats};
use crate::errors::AppResult;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Stored value with its insertion time
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            inserted_at: Instant::now(),
        }
    }

    /// Live while `now - inserted_at <= ttl`
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.inserted_at) > ttl
    }
}

struct CacheInner {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheInner {
    fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        self.store.retain(|_, entry| {
            let live = !entry.is_expired(now, self.ttl);
            if !live {
                removed += 1;
            }
            live
        });
        removed
    }

    fn evict_oldest(&self) {
        let oldest = self
            .store
            .iter()
            .min_by_key(|entry| entry.value().inserted_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.store.remove(&key);
            debug!(cache_key = %key, "Cache full, evicted oldest entry");
        }
    }
}

/// In-memory cache shared by every search on the service.
///
/// Cloning is cheap and every clone sees the same entries. Reads and writes
/// of one key are atomic with respect to each other; different keys never
/// contend on a common lock. When enabled, a background task sweeps expired
/// entries on a fixed interval and stops on [`InMemoryCache::shutdown`] or
/// once the last clone is dropped.
#[derive(Clone)]
pub struct InMemoryCache {
    inner: Arc<CacheInner>,
    shutdown_tx: Option<Arc<mpsc::Sender<()>>>,
}

impl InMemoryCache {
    /// Create a cache, starting the sweep task if configured and a Tokio
    /// runtime is available
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Arc::new(CacheInner {
            store: DashMap::new(),
            ttl: config.ttl,
            max_entries: config.max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        });

        let shutdown_tx = if config.enable_background_sweep {
            Self::spawn_sweeper(&inner, config.sweep_interval)
        } else {
            None
        };

        Self { inner, shutdown_tx }
    }

    fn spawn_sweeper(
        inner: &Arc<CacheInner>,
        sweep_interval: Duration,
    ) -> Option<Arc<mpsc::Sender<()>>> {
        let Ok(handle) = Handle::try_current() else {
            warn!("No Tokio runtime available, cache sweep task not started");
            return None;
        };

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let store = Arc::clone(inner);
        let period = sweep_interval.max(Duration::from_millis(1));

        handle.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let removed = store.sweep();
                        if removed > 0 {
                            debug!(
                                removed,
                                remaining = store.store.len(),
                                "Swept expired cache entries"
                            );
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Cache sweep task received shutdown signal");
                        break;
                    }
                }
            }
        });

        Some(Arc::new(shutdown_tx))
    }

    /// Read a live entry. Missing, expired, and undecodable entries are all
    /// misses; an expired entry stays stored until the next sweep.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let cache_key = key.to_string();
        let now = Instant::now();

        let decoded = self.inner.store.get(&cache_key).and_then(|entry| {
            if entry.is_expired(now, self.inner.ttl) {
                return None;
            }
            match serde_json::from_slice::<T>(&entry.data) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(
                        cache_key = %cache_key,
                        error = %e,
                        "Undecodable cache entry treated as miss"
                    );
                    None
                }
            }
        });

        if decoded.is_some() {
            self.inner.hits.fetch_add(1, Ordering::Relaxed);
            debug!(cache_key = %cache_key, "Cache hit");
        } else {
            self.inner.misses.fetch_add(1, Ordering::Relaxed);
            debug!(cache_key = %cache_key, "Cache miss");
        }
        decoded
    }

    /// Store a value with a fresh insertion time, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized
    pub fn set<T: Serialize + ?Sized>(&self, key: &CacheKey, value: &T) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        let cache_key = key.to_string();

        if !self.inner.store.contains_key(&cache_key)
            && self.inner.store.len() >= self.inner.max_entries
        {
            self.inner.sweep();
            if self.inner.store.len() >= self.inner.max_entries {
                self.inner.evict_oldest();
            }
        }

        self.inner
            .store
            .insert(cache_key, CacheEntry::new(serialized));
        Ok(())
    }

    /// Remove one entry, reporting whether it existed
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        self.inner.store.remove(&key.to_string()).is_some()
    }

    /// Remove every expired entry, returning how many were removed
    pub fn sweep(&self) -> usize {
        self.inner.sweep()
    }

    /// Number of stored entries, expired ones included until swept
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.store.len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.store.is_empty()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.inner.store.clear();
    }

    /// Hit, miss, and entry counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.inner.hits.load(Ordering::Relaxed),
            misses: self.inner.misses.load(Ordering::Relaxed),
            entries: self.inner.store.len(),
        }
    }

    /// Stop the background sweep task. Entries stay readable.
    pub fn shutdown(&self) {
        if let Some(tx) = &self.shutdown_tx {
            if let Err(e) = tx.try_send(()) {
                debug!(error = ?e, "Cache shutdown signal send failed (task likely stopped)");
            }
        }
    }
}
