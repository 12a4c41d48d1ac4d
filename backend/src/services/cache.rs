use crate::models::{FetchQuery, VideoRecord};
use log::debug;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry {
    records: Vec<VideoRecord>,
    stored_at: Instant,
}

/// Collector output keyed by query, valid for a fixed time after insertion.
pub struct FetchCache {
    ttl: Duration,
    entries: Mutex<HashMap<FetchQuery, CacheEntry>>,
}

impl FetchCache {
    pub fn new(ttl: Duration) -> Self {
        FetchCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached records if the entry is younger than the TTL.
    /// Expired entries are evicted on lookup.
    pub fn get(&self, key: &FetchQuery) -> Option<Vec<VideoRecord>> {
        let mut entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;

        if entry.stored_at.elapsed() < self.ttl {
            return Some(entry.records.clone());
        }

        debug!("Cache entry for channel {} expired", key.channel_id);
        entries.remove(key);
        None
    }

    pub fn insert(&self, key: FetchQuery, records: Vec<VideoRecord>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key,
                CacheEntry {
                    records,
                    stored_at: Instant::now(),
                },
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        if let Ok(entries) = self.entries.lock() {
            entries.len()
        } else {
            0
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
