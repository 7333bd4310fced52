//! TTL cache for built select lists, one snapshot per (kind, token) key.
//!
//! Stores typed `Arc<Vec<ListItem>>` — no JSON round-trip on reads. Entries
//! are always rewritten wholesale, never partially mutated. Singleflight per
//! key is best-effort: a thundering-herd re-fetch on simultaneous misses is
//! acceptable, concurrent writers just race last-write-wins.

use crate::select::EntityKind;
use crate::select::item::ListItem;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

/// Expiry for live-search entries. The admin UI re-polls constantly while the
/// user types, so these only need to survive a typing session.
pub const SEARCH_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache key: entity kind plus a lookup token (`term:...`, `parent-id:...`,
/// `parent-name:...`, `all:...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: EntityKind,
    pub token: String,
}

impl CacheKey {
    pub fn new(kind: EntityKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.token)
    }
}

struct Entry {
    cached_at: Instant,
    /// `None` means the entry never expires (full-list snapshots, which are
    /// invalidated externally rather than by this cache).
    ttl: Option<Duration>,
    value: Arc<Vec<ListItem>>,
}

#[derive(Clone, Default)]
pub struct SelectListCache {
    entries: Arc<DashMap<CacheKey, Entry>>,
    /// key → in-flight flag (singleflight guard)
    inflight: Arc<DashMap<CacheKey, Arc<AtomicBool>>>,
}

impl SelectListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a cached list if it exists and is fresh.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Vec<ListItem>>> {
        let entry = self.entries.get(key)?;
        match entry.ttl {
            Some(ttl) if entry.cached_at.elapsed() >= ttl => None,
            _ => Some(entry.value.clone()),
        }
    }

    /// Store a fresh list for the given key. `ttl: None` caches indefinitely.
    pub fn insert(&self, key: CacheKey, value: Arc<Vec<ListItem>>, ttl: Option<Duration>) {
        self.entries.insert(
            key,
            Entry {
                cached_at: Instant::now(),
                ttl,
                value,
            },
        );
    }

    /// Try to claim the singleflight slot for a key.
    /// Returns `true` if this caller should build the list; `false` if another is already building it.
    pub fn try_claim(&self, key: &CacheKey) -> bool {
        let flag = self
            .inflight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(AtomicBool::new(false)))
            .clone();
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the singleflight slot for a key (call after insert or on error).
    pub fn release(&self, key: &CacheKey) {
        if let Some(flag) = self.inflight.get(key) {
            flag.store(false, Ordering::Release);
        }
        debug!(key = %key, "select list cache slot released");
    }
}
