pub mod app_config;
pub mod kv;
pub mod models;
pub mod history_repo;
pub mod feedback_repo;
pub mod preference_repo;

use std::sync::Arc;

pub use kv::{FileStore, InMemoryStore, KeyValueStore};
pub use models::{FeedbackEntry, HistoryEntry};
pub use history_repo::HistoryRepository;
pub use feedback_repo::FeedbackRepository;
pub use preference_repo::PreferenceRepository;

use app_config::{StorageBackend, StorageConfig};

/// Storage keys, shared with the browser build's local storage
pub mod keys {
    pub const LAST_QUIZ: &str = "ogt:lastQuiz";
    pub const HISTORY: &str = "ogt:history";
    pub const FEEDBACK: &str = "ogt:feedback";
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feedback message is empty")]
    EmptyFeedback,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Opens the key-value store selected by configuration
pub fn open_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryStore::new()),
        StorageBackend::File => {
            let store = FileStore::new(&config.path);
            tracing::info!("Persisting to {}", store.path().display());
            Arc::new(store)
        }
    }
}
