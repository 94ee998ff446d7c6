use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::history_repo::{load_list, save_list};
use crate::kv::KeyValueStore;
use crate::models::FeedbackEntry;
use crate::{keys, StoreError, StoreResult};

/// Append-only feedback box, newest first
pub struct FeedbackRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl FeedbackRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Stores a message as written; blank messages are refused
    pub async fn submit(&self, msg: &str) -> StoreResult<FeedbackEntry> {
        if msg.trim().is_empty() {
            return Err(StoreError::EmptyFeedback);
        }

        let _guard = self.write_lock.lock().await;
        let entry = FeedbackEntry::new(msg);
        let mut entries: Vec<FeedbackEntry> = load_list(self.store.as_ref(), keys::FEEDBACK).await?;
        entries.insert(0, entry.clone());
        save_list(self.store.as_ref(), keys::FEEDBACK, &entries).await?;

        info!("Feedback received ({} chars)", msg.chars().count());
        Ok(entry)
    }

    pub async fn list(&self) -> StoreResult<Vec<FeedbackEntry>> {
        load_list(self.store.as_ref(), keys::FEEDBACK).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryStore;

    #[tokio::test]
    async fn test_blank_feedback_rejected() {
        let repo = FeedbackRepository::new(Arc::new(InMemoryStore::new()));
        assert!(matches!(repo.submit("").await, Err(StoreError::EmptyFeedback)));
        assert!(matches!(repo.submit("  \n\t").await, Err(StoreError::EmptyFeedback)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_first_and_untrimmed() {
        let repo = FeedbackRepository::new(Arc::new(InMemoryStore::new()));
        repo.submit("first").await.unwrap();
        repo.submit("  second  ").await.unwrap();

        let entries = repo.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "  second  ");
        assert_eq!(entries[1].msg, "first");
    }
}
