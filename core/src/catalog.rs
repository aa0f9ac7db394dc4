//! Static reference data: the geography table and the merchant catalog.
//!
//! Pure data plus small pickers; nothing here holds state. The -90°
//! longitude split partitions the table into the "east" and "west" pools
//! the impossible-travel pattern draws from.

use crate::rng::GenRng;

/// A named reference location, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Longitude split between the eastern and western location pools.
pub const EAST_WEST_SPLIT: f64 = -90.0;

/// US city reference table.
pub const LOCATIONS: &[Location] = &[
    Location { name: "New York", latitude: 40.7128, longitude: -74.0060 },
    Location { name: "Los Angeles", latitude: 34.0522, longitude: -118.2437 },
    Location { name: "Chicago", latitude: 41.8781, longitude: -87.6298 },
    Location { name: "Houston", latitude: 29.7604, longitude: -95.3698 },
    Location { name: "Phoenix", latitude: 33.4484, longitude: -112.0740 },
    Location { name: "Philadelphia", latitude: 39.9526, longitude: -75.1652 },
    Location { name: "San Antonio", latitude: 29.4241, longitude: -98.4936 },
    Location { name: "San Diego", latitude: 32.7157, longitude: -117.1611 },
    Location { name: "Dallas", latitude: 32.7767, longitude: -96.7970 },
    Location { name: "San Jose", latitude: 37.3382, longitude: -121.8863 },
    Location { name: "Austin", latitude: 30.2672, longitude: -97.7431 },
    Location { name: "Jacksonville", latitude: 30.3322, longitude: -81.6557 },
    Location { name: "Fort Worth", latitude: 32.7555, longitude: -97.3308 },
    Location { name: "Columbus", latitude: 39.9612, longitude: -82.9988 },
    Location { name: "San Francisco", latitude: 37.7749, longitude: -122.4194 },
    Location { name: "Charlotte", latitude: 35.2271, longitude: -80.8431 },
    Location { name: "Indianapolis", latitude: 39.7684, longitude: -86.1581 },
    Location { name: "Seattle", latitude: 47.6062, longitude: -122.3321 },
    Location { name: "Denver", latitude: 39.7392, longitude: -104.9903 },
    Location { name: "Boston", latitude: 42.3601, longitude: -71.0589 },
    Location { name: "Miami", latitude: 25.7617, longitude: -80.1918 },
];

/// Full merchant catalog. The first EVERYDAY_MERCHANTS entries are the
/// everyday subset used for normal spend; the tail carries the ATM marker.
pub const MERCHANTS: &[&str] = &[
    "Amazon Web Services",
    "Walmart Supercenter",
    "Target",
    "Best Buy",
    "Home Depot",
    "CVS Pharmacy",
    "Walgreens",
    "7-Eleven",
    "Starbucks Coffee",
    "McDonald's",
    "Burger King",
    "Subway",
    "Pizza Hut",
    "KFC",
    "PayPal",
    "Western Union",
    "Shell Gas Station",
    "ATM Chase Bank",
    "ATM Bank of America",
    "ATM Wells Fargo",
    "ATM Citibank",
    "ATM PNC Bank",
];

/// Number of leading MERCHANTS entries forming the everyday subset.
pub const EVERYDAY_MERCHANTS: usize = 17;

/// Merchants plausible for five-figure single purchases.
pub const HIGH_TICKET_MERCHANTS: &[&str] =
    &["Best Buy", "Home Depot", "Amazon Web Services"];

/// Substring that forces the ATM channel for a merchant.
pub const ATM_MARKER: &str = "ATM";

/// The everyday merchant subset (no ATM entries).
pub fn everyday_merchants() -> &'static [&'static str] {
    &MERCHANTS[..EVERYDAY_MERCHANTS]
}

/// Uniform draw from the full geography table.
pub fn random_location(rng: &mut GenRng) -> &'static Location {
    rng.pick(LOCATIONS)
}

/// Locations east of the split (longitude > -90°).
pub fn eastern_locations() -> Vec<&'static Location> {
    LOCATIONS
        .iter()
        .filter(|l| l.longitude > EAST_WEST_SPLIT)
        .collect()
}

/// Locations at or west of the split (longitude ≤ -90°).
pub fn western_locations() -> Vec<&'static Location> {
    LOCATIONS
        .iter()
        .filter(|l| l.longitude <= EAST_WEST_SPLIT)
        .collect()
}

/// Apply up to ±max_deg of jitter to a base location, keeping the
/// 6-decimal coordinate precision of the output contract.
pub fn jittered(rng: &mut GenRng, base: &Location, max_deg: f64) -> (f64, f64) {
    let latitude = base.latitude + rng.uniform(-max_deg, max_deg);
    let longitude = base.longitude + rng.uniform(-max_deg, max_deg);
    (round6(latitude), round6(longitude))
}

pub(crate) fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_well_formed() {
        assert_eq!(LOCATIONS.len(), 21);
        assert_eq!(MERCHANTS.len(), 22);
        assert!(EVERYDAY_MERCHANTS < MERCHANTS.len());
        for l in LOCATIONS {
            assert!((-90.0..=90.0).contains(&l.latitude), "{}", l.name);
            assert!((-180.0..=180.0).contains(&l.longitude), "{}", l.name);
        }
    }

    #[test]
    fn east_west_pools_partition_the_table() {
        let east = eastern_locations();
        let west = western_locations();
        assert_eq!(east.len() + west.len(), LOCATIONS.len());
        assert!(east.iter().all(|l| l.longitude > EAST_WEST_SPLIT));
        assert!(west.iter().all(|l| l.longitude <= EAST_WEST_SPLIT));
        assert!(!east.is_empty() && !west.is_empty());
    }

    #[test]
    fn everyday_subset_has_no_atm_entries() {
        assert!(everyday_merchants().iter().all(|m| !m.contains(ATM_MARKER)));
        assert!(MERCHANTS[EVERYDAY_MERCHANTS..]
            .iter()
            .all(|m| m.contains(ATM_MARKER)));
    }

    #[test]
    fn high_ticket_merchants_come_from_the_everyday_subset() {
        for m in HIGH_TICKET_MERCHANTS {
            assert!(everyday_merchants().contains(m), "{m} not in catalog");
        }
    }
}
