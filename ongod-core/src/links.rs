//! Provider search URLs prefilled with trip parameters.
//!
//! Neither builder validates its input: malformed dates produce a link the
//! provider will not understand, never an error.

use crate::preference::DEFAULT_ORIGIN;

const FLIGHT_SEARCH_BASE: &str = "https://www.skyscanner.com/transport/flights";
const STAY_SEARCH_BASE: &str = "https://www.booking.com/searchresults.html";

/// Path-style flight search, e.g. `.../flights/BOM/BKK/20250110/20250113/`
pub fn flight_search_link(origin: &str, destination: &str, start: &str, end: &str) -> String {
    let origin = if origin.is_empty() { DEFAULT_ORIGIN } else { origin };
    format!(
        "{}/{}/{}/{}/{}/",
        FLIGHT_SEARCH_BASE,
        urlencoding::encode(origin),
        urlencoding::encode(destination),
        start.replace('-', ""),
        end.replace('-', ""),
    )
}

/// Query-string stay search; dates pass through untouched
pub fn stay_search_link(place: &str, start: &str, end: &str, adults: Option<u32>) -> String {
    let adults = adults.filter(|n| *n > 0).unwrap_or(1);
    format!(
        "{}?ss={}&checkin={}&checkout={}&group_adults={}",
        STAY_SEARCH_BASE,
        urlencoding::encode(place),
        start,
        end,
        adults,
    )
}
