use tracing::debug;

use crate::catalog::Destination;
use crate::preference::{Preference, Vibe};

#[derive(Debug, Clone)]
pub struct DestinationRule {
    pub name: String,
    pub conditions: Vec<RuleCondition>,
    pub destination: Destination,
    pub priority: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub enum RuleCondition {
    Vibe(Vibe),
    Nightlife(bool),
}

/// Picks a destination from the first matching rule, highest priority first
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<DestinationRule>,
    fallback: Destination,
}

impl RuleEngine {
    pub fn new(rules: Vec<DestinationRule>, fallback: Destination) -> Self {
        let mut rules = rules;
        // stable, so equal priorities keep table order
        rules.sort_by_key(|r| -r.priority);
        Self { rules, fallback }
    }

    pub fn select_destination(&self, preference: &Preference) -> Destination {
        match self
            .rules
            .iter()
            .filter(|r| r.is_active)
            .find(|r| self.matches(r, preference))
        {
            Some(rule) => {
                debug!("Rule '{}' matched, destination {}", rule.name, rule.destination);
                rule.destination
            }
            None => self.fallback,
        }
    }

    fn matches(&self, rule: &DestinationRule, preference: &Preference) -> bool {
        rule.conditions.iter().all(|condition| match condition {
            RuleCondition::Vibe(vibe) => preference.vibe == *vibe,
            RuleCondition::Nightlife(on) => preference.nightlife == *on,
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(get_default_rules(), Destination::Udaipur)
    }
}

/// Vibe beats nightlife; anything unmatched falls through to the engine's fallback
pub fn get_default_rules() -> Vec<DestinationRule> {
    vec![
        DestinationRule {
            name: "Beach Vibe".to_string(),
            priority: 100,
            is_active: true,
            conditions: vec![RuleCondition::Vibe(Vibe::Beach)],
            destination: Destination::Goa,
        },
        DestinationRule {
            name: "Mountain Vibe".to_string(),
            priority: 90,
            is_active: true,
            conditions: vec![RuleCondition::Vibe(Vibe::Mountain)],
            destination: Destination::Manali,
        },
        DestinationRule {
            name: "City Vibe".to_string(),
            priority: 80,
            is_active: true,
            conditions: vec![RuleCondition::Vibe(Vibe::City)],
            destination: Destination::Bangkok,
        },
        DestinationRule {
            name: "Nightlife".to_string(),
            priority: 70,
            is_active: true,
            conditions: vec![RuleCondition::Nightlife(true)],
            destination: Destination::Bangkok,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn preference(vibe: Vibe, nightlife: bool) -> Preference {
        let mut pref = Preference::quiz_defaults(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        pref.vibe = vibe;
        pref.nightlife = nightlife;
        pref
    }

    #[test]
    fn test_vibe_beats_nightlife() {
        let engine = RuleEngine::default();
        assert_eq!(engine.select_destination(&preference(Vibe::Beach, true)), Destination::Goa);
        assert_eq!(engine.select_destination(&preference(Vibe::Mountain, true)), Destination::Manali);
        assert_eq!(engine.select_destination(&preference(Vibe::City, false)), Destination::Bangkok);
    }

    #[test]
    fn test_mix_uses_nightlife_then_fallback() {
        let engine = RuleEngine::default();
        assert_eq!(engine.select_destination(&preference(Vibe::Mix, true)), Destination::Bangkok);
        assert_eq!(engine.select_destination(&preference(Vibe::Mix, false)), Destination::Udaipur);
    }

    #[test]
    fn test_inactive_rules_are_skipped() {
        let mut rules = get_default_rules();
        rules[0].is_active = false;
        let engine = RuleEngine::new(rules, Destination::Udaipur);
        assert_eq!(engine.select_destination(&preference(Vibe::Beach, true)), Destination::Bangkok);
    }

    #[test]
    fn test_priority_order_not_table_order() {
        let mut rules = get_default_rules();
        rules.reverse();
        let engine = RuleEngine::new(rules, Destination::Udaipur);
        assert_eq!(engine.select_destination(&preference(Vibe::Beach, true)), Destination::Goa);
    }
}
