use ongod_core::{derive, format_inr, stay_search_link, BudgetTier, Preference, PricingEngine, Vibe};

fn preference(vibe: Vibe, nightlife: bool, budget_inr: u32) -> Preference {
    let json = serde_json::json!({
        "origin": "BOM",
        "start": "2025-01-10",
        "end": "2025-01-13",
        "style": "balanced",
        "interests": ["food", "photo"],
        "budgetINR": budget_inr,
        "adults": 2,
        "weather": "warm",
        "nightlife": nightlife,
        "diet": "none",
        "vibe": vibe,
    });
    serde_json::from_value(json).expect("valid preference")
}

fn sweep() -> Vec<Preference> {
    let mut prefs = Vec::new();
    for vibe in [Vibe::Beach, Vibe::Mountain, Vibe::City, Vibe::Mix] {
        for nightlife in [true, false] {
            for budget in [0, 24_999, 25_000, 59_999, 60_000, 500_000] {
                prefs.push(preference(vibe, nightlife, budget));
            }
        }
    }
    prefs
}

#[test]
fn test_derivation_is_deterministic() {
    for pref in sweep() {
        assert_eq!(derive(&pref), derive(&pref));
    }
}

#[test]
fn test_always_three_days() {
    for pref in sweep() {
        assert_eq!(derive(&pref).days.len(), 3);
    }
}

#[test]
fn test_flight_iff_bangkok() {
    for pref in sweep() {
        let it = derive(&pref);
        assert_eq!(it.flight.is_some(), it.destination == "Bangkok", "{:?}", pref);
    }
}

#[test]
fn test_stay_price_is_three_times_base() {
    let pricing = PricingEngine::default();
    for pref in sweep() {
        let base = pricing.stay_base(BudgetTier::from_budget(pref.budget_inr));
        assert_eq!(derive(&pref).stay.price_inr, 3 * base);
    }
}

#[test]
fn test_destination_precedence() {
    assert_eq!(derive(&preference(Vibe::Beach, true, 40_000)).destination, "Goa");
    assert_eq!(derive(&preference(Vibe::Mix, true, 40_000)).destination, "Bangkok");
    assert_eq!(derive(&preference(Vibe::Mix, false, 40_000)).destination, "Udaipur");
}

#[test]
fn test_budget_tier_boundary() {
    let low = preference(Vibe::Mix, false, 24_999);
    assert_eq!(low.budget_tier(), BudgetTier::Budget);
    assert_eq!(derive(&low).stay.price_inr, 10_500);

    let mid = preference(Vibe::Mix, false, 25_000);
    assert_eq!(mid.budget_tier(), BudgetTier::Mid);
    assert_eq!(derive(&mid).stay.price_inr, 19_500);
}

#[test]
fn test_bangkok_flight_link() {
    let pref: Preference = serde_json::from_value(serde_json::json!({
        "origin": "BOM",
        "vibe": "city",
        "start": "2025-01-10",
        "end": "2025-01-13",
    }))
    .unwrap();
    let link = derive(&pref).flight.expect("flight").deep_link;

    assert!(link.contains("20250110"));
    assert!(link.contains("20250113"));
    assert!(link.contains("/BOM/"));
    assert!(link.contains("/BKK/"));
}

#[test]
fn test_stay_link_scenario() {
    let link = stay_search_link("Goa", "2025-03-01", "2025-03-04", Some(2));
    for part in ["ss=Goa", "checkin=2025-03-01", "checkout=2025-03-04", "group_adults=2"] {
        assert!(link.contains(part), "{} missing from {}", part, link);
    }
}

#[test]
fn test_empty_form_still_derives() {
    let pref: Preference = serde_json::from_str("{}").unwrap();
    let it = derive(&pref);

    assert_eq!(it.destination, "Udaipur");
    assert_eq!(it.stay.price_inr, 10_500);
    assert!(it.stay.deep_link.ends_with("checkin=&checkout=&group_adults=1"));
    assert!(it.days[1].summary.contains("highlights"));
}

#[test]
fn test_currency_formatting() {
    let s = format_inr(Some(40_000));
    assert!(s.contains("40,000"));
    assert!(s.contains('₹'));
    assert_eq!(format_inr(None), format_inr(Some(0)));
}
