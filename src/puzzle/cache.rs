//! Time-boxed solution cache
//!
//! Stores solved puzzles keyed by grid fingerprint for a bounded time. One
//! mutex guards the whole map, so concurrent reads, writes, and the
//! periodic sweep never race. A miss or an expired entry is `None`, which
//! stays distinguishable from a cached puzzle with zero solutions.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Default time-to-live for stored solutions, in minutes (one day)
pub const DEFAULT_TTL_MINUTES: u64 = 1440;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Time-boxed key-value store for solved puzzles
pub struct SolutionCache<V> {
    entries: Mutex<FxHashMap<String, Entry<V>>>,
}

impl<V: Clone> SolutionCache<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Store `value` under `key` for `ttl_minutes` minutes
    pub fn set(&self, key: impl Into<String>, value: V, ttl_minutes: u64) {
        self.set_for(key, value, Duration::from_secs(ttl_minutes * 60));
    }

    /// Store `value` under `key` until `ttl` from now
    pub fn set_for(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.into(), entry);
    }

    /// Fetch the value under `key`, removing it when already expired
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Drop every expired entry, returning how many were removed
    pub fn sweep(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "swept expired cache entries");
        }
        removed
    }

    /// Number of stored entries, expired ones included until swept
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<V: Clone> Default for SolutionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a background thread sweeping `cache` every `interval_minutes`
pub fn spawn_sweeper<V>(
    cache: Arc<SolutionCache<V>>,
    interval_minutes: u64,
) -> thread::JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_secs(interval_minutes * 60));
            debug!("cleaning solution cache");
            cache.sweep();
        }
    })
}
