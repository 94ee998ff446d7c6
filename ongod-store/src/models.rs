use chrono::{DateTime, SubsecRound, Utc};
use ongod_core::{Itinerary, Preference};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One past derivation: the answers given and the plan produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Nil until the history repository assigns one; the web build wrote no ids
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    /// Milliseconds since the epoch on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: DateTime<Utc>,
    pub answers: Preference,
    pub result: Itinerary,
}

impl HistoryEntry {
    pub fn new(answers: Preference, result: Itinerary) -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: now_millis(),
            answers,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub msg: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ts: now_millis(),
        }
    }
}

/// Current time at the millisecond precision the wire format keeps
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
