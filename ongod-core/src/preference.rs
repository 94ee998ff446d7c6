use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::pricing::BudgetTier;
use crate::{CoreError, CoreResult};

/// Origin used when the form leaves the field blank
pub const DEFAULT_ORIGIN: &str = "BOM";

pub const MIN_ADULTS: u32 = 1;
pub const MAX_ADULTS: u32 = 6;

/// Trip pace
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    Chill,
    #[default]
    Balanced,
    Packed,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Chill => "chill",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Packed => "packed",
        }
    }
}

/// Interest tags offered by the quiz
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    Food,
    Photo,
    Nightlife,
    History,
    Adventure,
    Beach,
    Nature,
    Shopping,
    Wellness,
}

impl Interest {
    pub const ALL: [Interest; 9] = [
        Interest::Food,
        Interest::Photo,
        Interest::Nightlife,
        Interest::History,
        Interest::Adventure,
        Interest::Beach,
        Interest::Nature,
        Interest::Shopping,
        Interest::Wellness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Food => "food",
            Interest::Photo => "photo",
            Interest::Nightlife => "nightlife",
            Interest::History => "history",
            Interest::Adventure => "adventure",
            Interest::Beach => "beach",
            Interest::Nature => "nature",
            Interest::Shopping => "shopping",
            Interest::Wellness => "wellness",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    #[default]
    Warm,
    Mild,
    Cold,
    Any,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    #[default]
    None,
    Veg,
    NonVeg,
    Vegan,
    Halal,
    Jain,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::None => "none",
            Diet::Veg => "veg",
            Diet::NonVeg => "non-veg",
            Diet::Vegan => "vegan",
            Diet::Halal => "halal",
            Diet::Jain => "jain",
        }
    }
}

/// Kind of place the traveller is after
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Vibe {
    Beach,
    Mountain,
    City,
    #[default]
    Mix,
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A traveller's answers to the planning quiz.
///
/// Deserialization never fails on bad field values: every malformed or
/// missing field is replaced by a safe default and the result is normalized
/// (origin uppercased and cut to three letters, adults clamped, interests
/// deduplicated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PreferenceForm")]
pub struct Preference {
    pub origin: String,
    pub start: String,
    pub end: String,
    pub style: TravelStyle,
    pub interests: Vec<Interest>,
    #[serde(rename = "budgetINR")]
    pub budget_inr: u32,
    pub adults: u32,
    pub weather: Weather,
    pub nightlife: bool,
    pub diet: Diet,
    pub vibe: Vibe,
}

impl Preference {
    /// The quiz's initial answers for a trip starting on `today`
    pub fn quiz_defaults(today: NaiveDate) -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            start: today.format("%Y-%m-%d").to_string(),
            end: (today + Duration::days(2)).format("%Y-%m-%d").to_string(),
            style: TravelStyle::Balanced,
            interests: vec![Interest::Food, Interest::Photo],
            budget_inr: 40_000,
            adults: 1,
            weather: Weather::Warm,
            nightlife: true,
            diet: Diet::None,
            vibe: Vibe::Mix,
        }
    }

    pub fn budget_tier(&self) -> BudgetTier {
        BudgetTier::from_budget(self.budget_inr)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end)
    }

    /// Nights between start and end, when both dates parse
    pub fn trip_nights(&self) -> Option<i64> {
        Some((self.end_date()? - self.start_date()?).num_days())
    }

    /// Origin code to use for links; falls back to the default origin when blank
    pub fn origin_code(&self) -> &str {
        if self.origin.trim().is_empty() {
            DEFAULT_ORIGIN
        } else {
            &self.origin
        }
    }

    /// Comma-separated interest names in display order
    pub fn interests_label(&self) -> String {
        self.interests
            .iter()
            .map(Interest::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rejects a trip that ends before it starts.
    ///
    /// Unparseable dates are let through; they only degrade the deep links.
    pub fn validate(&self) -> CoreResult<()> {
        if let (Some(start), Some(end)) = (self.start_date(), self.end_date()) {
            if end < start {
                return Err(CoreError::ValidationError(format!(
                    "end date {} is before start date {}",
                    self.end, self.start
                )));
            }
        }
        Ok(())
    }
}

impl Default for Preference {
    fn default() -> Self {
        Self::quiz_defaults(Utc::now().date_naive())
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

// ============================================================================
// Lenient wire form
// ============================================================================

/// Raw quiz payload as submitted by a client, before normalization
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PreferenceForm {
    #[serde(deserialize_with = "lenient")]
    origin: Option<String>,
    #[serde(deserialize_with = "lenient")]
    start: String,
    #[serde(deserialize_with = "lenient")]
    end: String,
    #[serde(deserialize_with = "lenient")]
    style: TravelStyle,
    #[serde(deserialize_with = "lenient_interests")]
    interests: Vec<Interest>,
    #[serde(rename = "budgetINR", deserialize_with = "lenient_amount")]
    budget_inr: Option<u64>,
    #[serde(deserialize_with = "lenient_amount")]
    adults: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    weather: Weather,
    #[serde(deserialize_with = "lenient")]
    nightlife: bool,
    #[serde(deserialize_with = "lenient")]
    diet: Diet,
    #[serde(deserialize_with = "lenient")]
    vibe: Vibe,
}

impl From<PreferenceForm> for Preference {
    fn from(form: PreferenceForm) -> Self {
        let origin = form
            .origin
            .map(|o| o.trim().to_uppercase().chars().take(3).collect::<String>())
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

        let mut interests: Vec<Interest> = Vec::with_capacity(form.interests.len());
        for interest in form.interests {
            if !interests.contains(&interest) {
                interests.push(interest);
            }
        }

        let adults = form
            .adults
            .unwrap_or(u64::from(MIN_ADULTS))
            .clamp(u64::from(MIN_ADULTS), u64::from(MAX_ADULTS)) as u32;

        Self {
            origin,
            start: form.start,
            end: form.end,
            style: form.style,
            interests,
            budget_inr: form.budget_inr.unwrap_or(0).min(u64::from(u32::MAX)) as u32,
            adults,
            weather: form.weather,
            nightlife: form.nightlife,
            diet: form.diet,
            vibe: form.vibe,
        }
    }
}

/// Accepts any JSON value, keeping the default when it does not fit `T`
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_interests<'de, D>(deserializer: D) -> Result<Vec<Interest>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let tags = match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .filter_map(Interest::from_str_name)
            .collect(),
        _ => Vec::new(),
    };
    Ok(tags)
}

/// Numbers or numeric strings; negatives and garbage read as absent
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_amount)),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole_amount),
        _ => None,
    };
    Ok(amount)
}

fn whole_amount(f: f64) -> Option<u64> {
    f.is_finite().then(|| f.max(0.0).trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let pref: Preference = serde_json::from_value(json!({})).expect("lenient");
        assert_eq!(pref.origin, "BOM");
        assert_eq!(pref.budget_inr, 0);
        assert!(pref.interests.is_empty());
        assert_eq!(pref.adults, 1);
        assert!(!pref.nightlife);
        assert_eq!(pref.vibe, Vibe::Mix);
        assert_eq!(pref.style, TravelStyle::Balanced);
    }

    #[test]
    fn test_form_is_normalized() {
        let pref: Preference = serde_json::from_value(json!({
            "origin": " delhi",
            "interests": ["food", "photo", "food", "karaoke", 7],
            "budgetINR": "30000",
            "adults": 12,
            "diet": "non-veg",
            "vibe": "volcano",
            "style": "packed",
        }))
        .expect("lenient");

        assert_eq!(pref.origin, "DEL");
        assert_eq!(pref.interests, vec![Interest::Food, Interest::Photo]);
        assert_eq!(pref.budget_inr, 30_000);
        assert_eq!(pref.adults, 6);
        assert_eq!(pref.diet, Diet::NonVeg);
        assert_eq!(pref.vibe, Vibe::Mix);
        assert_eq!(pref.style, TravelStyle::Packed);
    }

    #[test]
    fn test_negative_budget_and_zero_adults_are_clamped() {
        let pref: Preference =
            serde_json::from_value(json!({ "budgetINR": -500, "adults": 0 })).expect("lenient");
        assert_eq!(pref.budget_inr, 0);
        assert_eq!(pref.adults, 1);
    }

    #[test]
    fn test_serializes_with_quiz_field_names() {
        let pref = Preference::quiz_defaults(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let value = serde_json::to_value(&pref).unwrap();
        assert_eq!(value["budgetINR"], 40_000);
        assert_eq!(value["start"], "2025-01-10");
        assert_eq!(value["end"], "2025-01-12");
        assert_eq!(value["interests"], json!(["food", "photo"]));

        let back: Preference = serde_json::from_value(value).unwrap();
        assert_eq!(back, pref);
    }

    #[test]
    fn test_date_order_validation() {
        let mut pref = Preference::quiz_defaults(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(pref.validate().is_ok());
        assert_eq!(pref.trip_nights(), Some(2));

        pref.end = "2025-02-27".to_string();
        assert!(matches!(pref.validate(), Err(CoreError::ValidationError(_))));

        pref.end = "someday".to_string();
        assert!(pref.validate().is_ok());
        assert_eq!(pref.trip_nights(), None);
    }

    #[test]
    fn test_blank_origin_code_defaults() {
        let mut pref = Preference::quiz_defaults(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        pref.origin = "  ".to_string();
        assert_eq!(pref.origin_code(), "BOM");
    }
}
