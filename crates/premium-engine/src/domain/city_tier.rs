//! City Tier Lookup
//!
//! Static classification of a normalized city name into a pricing tier.

use premium_common::CityTier;

/// Metropolitan cities, in normalized form
pub const TIER_1_CITIES: [&str; 7] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
];

/// Large non-metropolitan cities, in normalized form
pub const TIER_2_CITIES: [&str; 48] = [
    "Jaipur",
    "Chandigarh",
    "Indore",
    "Lucknow",
    "Patna",
    "Ranchi",
    "Visakhapatnam",
    "Coimbatore",
    "Bhopal",
    "Nagpur",
    "Vadodara",
    "Surat",
    "Rajkot",
    "Jodhpur",
    "Raipur",
    "Amritsar",
    "Varanasi",
    "Agra",
    "Dehradun",
    "Mysore",
    "Jabalpur",
    "Guwahati",
    "Thiruvananthapuram",
    "Ludhiana",
    "Nashik",
    "Allahabad",
    "Udaipur",
    "Aurangabad",
    "Hubli",
    "Belgaum",
    "Salem",
    "Vijayawada",
    "Tiruchirappalli",
    "Bhavnagar",
    "Gwalior",
    "Dhanbad",
    "Bareilly",
    "Aligarh",
    "Gaya",
    "Kozhikode",
    "Warangal",
    "Kolhapur",
    "Bilaspur",
    "Jalandhar",
    "Noida",
    "Guntur",
    "Asansol",
    "Siliguri",
];

/// Tier of an already-normalized city name.
///
/// Unrecognized names fall through to tier 3.
pub fn tier(city: &str) -> CityTier {
    if TIER_1_CITIES.contains(&city) {
        CityTier::Tier1
    } else if TIER_2_CITIES.contains(&city) {
        CityTier::Tier2
    } else {
        CityTier::Tier3
    }
}

/// Every tier 1 and tier 2 city, sorted alphabetically
pub fn known_cities() -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = TIER_1_CITIES
        .iter()
        .chain(TIER_2_CITIES.iter())
        .copied()
        .collect();
    cities.sort_unstable();
    cities
}
