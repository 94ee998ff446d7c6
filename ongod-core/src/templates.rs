//! Day-by-day skeletons the planner fills in from a preference.
//!
//! Templates are plain data: the generator picks a list for the trip length
//! and renders each entry, so adding a longer plan means adding a table here
//! rather than branching in the generator.

use crate::itinerary::{Activity, Day};
use crate::preference::{Diet, Preference};

/// Piece of a summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Text(&'static str),
    /// The preference's travel style
    Style,
    /// Interests joined with ", ", or `fallback` when there are none
    Interests { fallback: &'static str },
}

/// Note shown next to an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTemplate {
    None,
    WhenDiet(Diet, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityTemplate {
    pub time: Option<&'static str>,
    pub name: &'static str,
    pub note: NoteTemplate,
    pub price_inr: Option<u32>,
}

/// Evening plan, chosen by the nightlife toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveningTemplate {
    pub nightlife: &'static str,
    pub calm: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    pub title: &'static str,
    pub summary: &'static [Fragment],
    pub activities: &'static [ActivityTemplate],
    pub evening: Option<EveningTemplate>,
}

const fn at(time: &'static str, name: &'static str) -> ActivityTemplate {
    ActivityTemplate {
        time: Some(time),
        name,
        note: NoteTemplate::None,
        price_inr: None,
    }
}

static THREE_DAY_PREVIEW: [DayTemplate; 3] = [
    DayTemplate {
        title: "Day 1 – Arrival & Neighborhood Walk",
        summary: &[
            Fragment::Text("Check in, quick local exploration, and a "),
            Fragment::Style,
            Fragment::Text(" pace evening."),
        ],
        activities: &[
            at("10:00", "Arrival & hotel check-in"),
            ActivityTemplate {
                time: Some("13:00"),
                name: "Local lunch",
                note: NoteTemplate::WhenDiet(Diet::Veg, "veg-friendly"),
                price_inr: Some(600),
            },
            at("16:00", "Old town walk & photos"),
        ],
        evening: Some(EveningTemplate {
            nightlife: "Cocktails + live music 🎷",
            calm: "Sunset viewpoint 🌇 & early dinner",
        }),
    },
    DayTemplate {
        title: "Day 2 – Signature Experiences",
        summary: &[
            Fragment::Text("Curated picks across your interests: "),
            Fragment::Interests { fallback: "highlights" },
            Fragment::Text("."),
        ],
        activities: &[
            at("09:00", "Guided experience #1"),
            at("14:00", "Cafe crawl ☕ + creative pause"),
            at("17:00", "Golden hour photo spot 📸"),
        ],
        evening: Some(EveningTemplate {
            nightlife: "Night market + club hop 🕺",
            calm: "Spa & slow dinner by the water",
        }),
    },
    DayTemplate {
        title: "Day 3 – Flex & Fly",
        summary: &[Fragment::Text(
            "Buffer for shopping, food you missed, and airport transfers.",
        )],
        activities: &[
            at("10:00", "Brunch at a top-rated spot 🥞"),
            at("12:00", "Souvenir run"),
        ],
        evening: None,
    },
];

/// Day templates for a trip of `nights` nights.
///
/// Every length, known or not, currently gets the three-day preview.
pub fn templates_for(_nights: Option<i64>) -> &'static [DayTemplate] {
    &THREE_DAY_PREVIEW
}

impl DayTemplate {
    pub fn render(&self, preference: &Preference) -> Day {
        let summary = self
            .summary
            .iter()
            .map(|fragment| match fragment {
                Fragment::Text(text) => (*text).to_string(),
                Fragment::Style => preference.style.to_string(),
                Fragment::Interests { fallback } => {
                    let label = preference.interests_label();
                    if label.is_empty() {
                        (*fallback).to_string()
                    } else {
                        label
                    }
                }
            })
            .collect::<String>();

        Day {
            title: self.title.to_string(),
            summary,
            activities: self.activities.iter().map(|a| a.render(preference)).collect(),
            evening: self.evening.map(|e| e.pick(preference.nightlife).to_string()),
        }
    }
}

impl EveningTemplate {
    pub fn pick(&self, nightlife: bool) -> &'static str {
        if nightlife {
            self.nightlife
        } else {
            self.calm
        }
    }
}

impl ActivityTemplate {
    pub fn render(&self, preference: &Preference) -> Activity {
        let note = match self.note {
            NoteTemplate::WhenDiet(diet, text) if preference.diet == diet => Some(text.to_string()),
            _ => None,
        };

        Activity {
            time: self.time.map(str::to_string),
            name: self.name.to_string(),
            note,
            price_inr: self.price_inr,
        }
    }
}
