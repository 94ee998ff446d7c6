use tracing::debug;

use crate::catalog::Destination;
use crate::itinerary::{FlightQuote, Itinerary, StayQuote};
use crate::links::{flight_search_link, stay_search_link};
use crate::preference::Preference;
use crate::pricing::{PricingConfig, PricingEngine};
use crate::rules::RuleEngine;
use crate::templates::templates_for;

pub const MOCK_NOTES: [&str; 2] = [
    "This is a mock itinerary. Hook your /api/plan to go live.",
    "Refine results by toggling style, budget, and interests.",
];

/// Derives itineraries from quiz answers.
///
/// Derivation is total and deterministic: the same preference always yields
/// the same itinerary, and no input makes it fail.
#[derive(Debug, Clone, Default)]
pub struct ItineraryGenerator {
    pricing_engine: PricingEngine,
    rule_engine: RuleEngine,
}

impl ItineraryGenerator {
    pub fn new(pricing_config: PricingConfig) -> Self {
        Self {
            pricing_engine: PricingEngine::new(pricing_config),
            rule_engine: RuleEngine::default(),
        }
    }

    pub fn with_rules(mut self, rule_engine: RuleEngine) -> Self {
        self.rule_engine = rule_engine;
        self
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing_engine
    }

    pub fn derive(&self, preference: &Preference) -> Itinerary {
        let destination = self.rule_engine.select_destination(preference);
        let tier = preference.budget_tier();
        debug!(%destination, %tier, "Deriving itinerary");

        let flight = self.flight_quote(destination, preference);
        let stay = self.stay_quote(destination, preference);

        let days = templates_for(preference.trip_nights())
            .iter()
            .map(|template| template.render(preference))
            .collect();

        Itinerary {
            destination: destination.name().to_string(),
            country: Some(destination.country().to_string()),
            flight,
            stay,
            days,
            notes: MOCK_NOTES.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn flight_quote(&self, destination: Destination, preference: &Preference) -> Option<FlightQuote> {
        let airport = destination.airport_code()?;
        let config = self.pricing_engine.config();
        Some(FlightQuote {
            carrier: config.flight_carrier.clone(),
            price_inr: config.flight_price_inr,
            deep_link: flight_search_link(
                preference.origin_code(),
                airport,
                &preference.start,
                &preference.end,
            ),
        })
    }

    fn stay_quote(&self, destination: Destination, preference: &Preference) -> StayQuote {
        StayQuote {
            name: destination.stay_name().to_string(),
            price_inr: self.pricing_engine.stay_price(preference.budget_tier()),
            rating: self.pricing_engine.config().stay_rating,
            deep_link: stay_search_link(
                destination.name(),
                &preference.start,
                &preference.end,
                Some(preference.adults),
            ),
        }
    }
}

/// Derives an itinerary with the stock pricing and destination rules
pub fn derive(preference: &Preference) -> Itinerary {
    ItineraryGenerator::default().derive(preference)
}
