use std::sync::Arc;

use ongod_core::{CurrencyStyle, ItineraryGenerator};
use ongod_store::app_config::Config;
use ongod_store::history_repo::DEFAULT_MAX_ENTRIES;
use ongod_store::{
    open_store, FeedbackRepository, HistoryRepository, InMemoryStore, KeyValueStore,
    PreferenceRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ItineraryGenerator>,
    pub preferences: Arc<PreferenceRepository>,
    pub history: Arc<HistoryRepository>,
    pub feedback: Arc<FeedbackRepository>,
    pub currency: CurrencyStyle,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let store = open_store(&config.storage);
        Self::with_store(
            store,
            ItineraryGenerator::new(config.pricing.clone()),
            config.history.max_entries,
            config.currency.style,
        )
    }

    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        generator: ItineraryGenerator,
        max_history: usize,
        currency: CurrencyStyle,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            preferences: Arc::new(PreferenceRepository::new(store.clone())),
            history: Arc::new(HistoryRepository::new(store.clone(), max_history)),
            feedback: Arc::new(FeedbackRepository::new(store)),
            currency,
        }
    }

    /// Stock pricing over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_store(
            Arc::new(InMemoryStore::new()),
            ItineraryGenerator::default(),
            DEFAULT_MAX_ENTRIES,
            CurrencyStyle::default(),
        )
    }

    pub fn format_inr(&self, amount: u32) -> String {
        self.currency.format(Some(i64::from(amount)))
    }
}
