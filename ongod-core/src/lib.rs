pub mod preference;
pub mod pricing;
pub mod catalog;
pub mod rules;
pub mod links;
pub mod money;
pub mod itinerary;
pub mod templates;
pub mod generator;
pub mod packages;

pub use preference::{Diet, Interest, Preference, TravelStyle, Vibe, Weather};
pub use pricing::{BudgetTier, PricingConfig, PricingEngine};
pub use catalog::Destination;
pub use rules::{DestinationRule, RuleCondition, RuleEngine};
pub use links::{flight_search_link, stay_search_link};
pub use money::{format_inr, CurrencyStyle};
pub use itinerary::{Activity, Day, FlightQuote, Itinerary, StayQuote};
pub use generator::{derive, ItineraryGenerator};
pub use packages::{curated_packages, Package};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
