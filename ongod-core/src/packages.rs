use serde::{Deserialize, Serialize};

/// Creator-curated trip pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub title: String,
    pub description: String,
    #[serde(rename = "priceINR")]
    pub price_inr: u32,
    /// Example destinations the pack applies to
    pub tag: String,
}

impl Package {
    fn new(title: &str, description: &str, price_inr: u32, tag: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            price_inr,
            tag: tag.to_string(),
        }
    }
}

pub fn curated_packages() -> Vec<Package> {
    vec![
        Package::new(
            "Beach & Beats",
            "3-day coastal escapes with curated nightlife 🏖️🎶",
            4_999,
            "Goa / Phuket / Bali",
        ),
        Package::new(
            "Mountain Reset",
            "Slow mornings, viewpoints, cedar-scented cafes 🏔️",
            5_999,
            "Manali / Bir / Leh",
        ),
        Package::new(
            "City Sprint",
            "72-hour urban blitz with coffee + culture ☕🏙️",
            5_499,
            "Bangkok / Singapore / Dubai",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let packs = curated_packages();
        assert_eq!(packs.len(), 3);
        assert_eq!(packs[0].title, "Beach & Beats");
        assert_eq!(packs[2].price_inr, 5_499);

        let value = serde_json::to_value(&packs[1]).unwrap();
        assert_eq!(value["priceINR"], 5_999);
        assert_eq!(value["tag"], "Manali / Bir / Leh");
    }
}
