use serde::{Deserialize, Serialize};
use std::fmt;

/// Destinations the planner knows how to fill in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Destination {
    Goa,
    Manali,
    Bangkok,
    Udaipur,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Goa,
        Destination::Manali,
        Destination::Bangkok,
        Destination::Udaipur,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Destination::Goa => "Goa",
            Destination::Manali => "Manali",
            Destination::Bangkok => "Bangkok",
            Destination::Udaipur => "Udaipur",
        }
    }

    pub fn country(&self) -> &'static str {
        match self {
            Destination::Bangkok => "Thailand",
            _ => "India",
        }
    }

    /// Hotel suggested for the destination
    pub fn stay_name(&self) -> &'static str {
        match self {
            Destination::Goa => "Vivenda Rebelo",
            Destination::Manali => "The Himalayan",
            Destination::Bangkok => "The Quarter Silom",
            Destination::Udaipur => "Jagat Niwas Palace",
        }
    }

    /// Arrival airport used for flight links; only cross-border trips get one
    pub fn airport_code(&self) -> Option<&'static str> {
        match self {
            Destination::Bangkok => Some("BKK"),
            _ => None,
        }
    }

    /// Domestic trips are assumed to need no flight
    pub fn is_cross_border(&self) -> bool {
        self.airport_code().is_some()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_bangkok_is_cross_border() {
        let cross: Vec<_> = Destination::ALL.iter().filter(|d| d.is_cross_border()).collect();
        assert_eq!(cross, vec![&Destination::Bangkok]);
        assert_eq!(Destination::Bangkok.country(), "Thailand");
        assert_eq!(Destination::Udaipur.country(), "India");
    }
}
