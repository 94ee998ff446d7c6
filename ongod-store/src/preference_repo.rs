use ongod_core::Preference;
use std::sync::Arc;
use tracing::warn;

use crate::kv::KeyValueStore;
use crate::{keys, StoreResult};

/// Remembers the last submitted quiz so the form can be prefilled
pub struct PreferenceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, preference: &Preference) -> StoreResult<()> {
        let raw = serde_json::to_string(preference)?;
        self.store.set(keys::LAST_QUIZ, raw).await
    }

    /// Last saved quiz; `None` when nothing usable is stored
    pub async fn load(&self) -> StoreResult<Option<Preference>> {
        let Some(raw) = self.store.get(keys::LAST_QUIZ).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(preference) => Ok(Some(preference)),
            Err(e) => {
                warn!("Ignoring unreadable saved quiz: {}", e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryStore;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_save_then_load() {
        let repo = PreferenceRepository::new(Arc::new(InMemoryStore::new()));
        assert_eq!(repo.load().await.unwrap(), None);

        let pref = Preference::quiz_defaults(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        repo.save(&pref).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Some(pref));
    }

    #[tokio::test]
    async fn test_garbage_reads_as_none() {
        let store = Arc::new(InMemoryStore::new());
        store.set(keys::LAST_QUIZ, "[1,2".to_string()).await.unwrap();
        let repo = PreferenceRepository::new(store);
        assert_eq!(repo.load().await.unwrap(), None);
    }
}
