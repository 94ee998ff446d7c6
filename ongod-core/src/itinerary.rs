use serde::{Deserialize, Serialize};

/// A derived trip plan with pricing and booking links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Only present for cross-border destinations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightQuote>,
    pub stay: StayQuote,
    pub days: Vec<Day>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuote {
    pub carrier: String,
    #[serde(rename = "priceINR")]
    pub price_inr: u32,
    pub deep_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub name: String,
    #[serde(rename = "priceINR")]
    pub price_inr: u32,
    pub rating: f64,
    pub deep_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub title: String,
    pub summary: String,
    pub activities: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "priceINR", default, skip_serializing_if = "Option::is_none")]
    pub price_inr: Option<u32>,
}

impl Itinerary {
    pub fn is_cross_border(&self) -> bool {
        self.flight.is_some()
    }
}
