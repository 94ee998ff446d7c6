use ongod_core::{Itinerary, Preference};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::kv::KeyValueStore;
use crate::models::HistoryEntry;
use crate::{keys, StoreResult};

pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Newest-first log of derivations, capped at `max_entries`
pub struct HistoryRepository {
    store: Arc<dyn KeyValueStore>,
    max_entries: usize,
    write_lock: Mutex<()>,
}

impl HistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, max_entries: usize) -> Self {
        Self {
            store,
            max_entries,
            write_lock: Mutex::new(()),
        }
    }

    /// Records a derivation, evicting the oldest entries past the cap
    pub async fn append(&self, answers: Preference, result: Itinerary) -> StoreResult<HistoryEntry> {
        let _guard = self.write_lock.lock().await;

        let entry = HistoryEntry::new(answers, result);
        let mut entries: Vec<HistoryEntry> = load_list(self.store.as_ref(), keys::HISTORY).await?;
        assign_missing_ids(&mut entries);
        entries.insert(0, entry.clone());
        entries.truncate(self.max_entries);

        save_list(self.store.as_ref(), keys::HISTORY, &entries).await?;
        info!("History entry {} saved for {}", entry.id, entry.result.destination);
        Ok(entry)
    }

    /// All entries, newest first. Entries stored without an id get one, and
    /// the list is written back so the id stays stable across reads.
    pub async fn list(&self) -> StoreResult<Vec<HistoryEntry>> {
        let entries: Vec<HistoryEntry> = load_list(self.store.as_ref(), keys::HISTORY).await?;
        if entries.iter().all(|e| !e.id.is_nil()) {
            return Ok(entries);
        }

        let _guard = self.write_lock.lock().await;
        // Reload under the lock; another writer may have assigned them already
        let mut entries: Vec<HistoryEntry> = load_list(self.store.as_ref(), keys::HISTORY).await?;
        let assigned = assign_missing_ids(&mut entries);
        if assigned > 0 {
            save_list(self.store.as_ref(), keys::HISTORY, &entries).await?;
            info!("Assigned ids to {} stored history entries", assigned);
        }
        Ok(entries)
    }

    pub async fn find(&self, id: Uuid) -> StoreResult<Option<HistoryEntry>> {
        let entries: Vec<HistoryEntry> = self.list().await?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    pub async fn clear(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.store.delete(keys::HISTORY).await
    }
}

fn assign_missing_ids(entries: &mut [HistoryEntry]) -> usize {
    let mut assigned = 0;
    for entry in entries.iter_mut().filter(|e| e.id.is_nil()) {
        entry.id = Uuid::new_v4();
        assigned += 1;
    }
    assigned
}

/// Reads a JSON list; a missing or unreadable value counts as empty
pub(crate) async fn load_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Vec<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!("Discarding unreadable list under {}: {}", key, e);
            Ok(Vec::new())
        }
    }
}

pub(crate) async fn save_list<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> StoreResult<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, raw).await
}
