use serde::{Deserialize, Serialize};
use std::fmt;

use crate::itinerary::Itinerary;

/// Lowest total budget that counts as mid tier
pub const MID_TIER_FLOOR_INR: u32 = 25_000;

/// Lowest total budget that counts as premium tier
pub const PREMIUM_TIER_FLOOR_INR: u32 = 60_000;

/// Coarse bucket derived from a trip's total budget.
///
/// Never stored on its own; always recomputed from the budget it came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Mid,
    Premium,
}

impl BudgetTier {
    pub fn from_budget(budget_inr: u32) -> Self {
        if budget_inr < MID_TIER_FLOOR_INR {
            BudgetTier::Budget
        } else if budget_inr < PREMIUM_TIER_FLOOR_INR {
            BudgetTier::Mid
        } else {
            BudgetTier::Premium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Mid => "mid",
            BudgetTier::Premium => "premium",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed prices used by the mock planner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Nightly stay rate for the budget tier
    pub stay_base_budget_inr: u32,

    /// Nightly stay rate for the mid tier
    pub stay_base_mid_inr: u32,

    /// Nightly stay rate for the premium tier
    pub stay_base_premium_inr: u32,

    /// Nights priced into every stay, independent of trip length
    pub stay_nights: u32,

    pub stay_rating: f64,

    pub flight_carrier: String,

    /// Return fare quoted for cross-border trips
    pub flight_price_inr: u32,

    /// Food and local travel placeholder added to estimates
    pub local_spend_inr: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            stay_base_budget_inr: 3_500,
            stay_base_mid_inr: 6_500,
            stay_base_premium_inr: 12_000,
            stay_nights: 3,
            stay_rating: 4.4,
            flight_carrier: "IndiGo".to_string(),
            flight_price_inr: 21_000,
            local_spend_inr: 6_000,
        }
    }
}

/// Tier-based pricing for the mock planner
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Nightly stay rate for a tier
    pub fn stay_base(&self, tier: BudgetTier) -> u32 {
        match tier {
            BudgetTier::Budget => self.config.stay_base_budget_inr,
            BudgetTier::Mid => self.config.stay_base_mid_inr,
            BudgetTier::Premium => self.config.stay_base_premium_inr,
        }
    }

    /// Total stay price: base rate times the fixed night count
    pub fn stay_price(&self, tier: BudgetTier) -> u32 {
        self.config.stay_nights.saturating_mul(self.stay_base(tier))
    }

    /// Flight + stay + local spend placeholder
    pub fn estimated_total(&self, itinerary: &Itinerary) -> u32 {
        let flight = itinerary.flight.as_ref().map_or(0, |f| f.price_inr);
        flight
            .saturating_add(itinerary.stay.price_inr)
            .saturating_add(self.config.local_spend_inr)
    }
}
