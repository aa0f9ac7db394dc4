//! The normal-transaction model.
//!
//! Produces one plausible record per call, consistent with the account's
//! behavioral profile. The awake-band hours (8..=22) exclude the
//! unusual-time fraud band (2..=5), so a normal record can never trip
//! the off-hours heuristic by accident.

use crate::catalog::{self, ATM_MARKER};
use crate::profile::{random_account_id, ProfileStore};
use crate::record::{self, normal_txn_id, Channel, Status, TransactionRecord, TransactionType};
use crate::rng::GenRng;
use chrono::{Duration, NaiveDateTime};

/// Day span of the observation window (inclusive offset range).
const DAY_SPAN: u32 = 6;

/// Awake-band hours for normal activity, both ends included.
pub const AWAKE_HOURS: (u32, u32) = (8, 22);

/// Right-skewed amount mixture: ((low, high), weight) per tier.
const AMOUNT_TIERS: [((f64, f64), f64); 3] = [
    ((10.0, 500.0), 0.70),
    ((500.0, 2000.0), 0.27),
    ((2000.0, 5000.0), 0.03),
];

/// Channel mix when the merchant does not force ATM.
const CHANNEL_WEIGHTS: [(Channel, f64); 3] = [
    (Channel::Mobile, 0.40),
    (Channel::Pos, 0.36),
    (Channel::Online, 0.24),
];

/// Status mix: approvals dominate, the rest splits evenly.
const STATUS_WEIGHTS: [(Status, f64); 3] = [
    (Status::Approved, 0.95),
    (Status::Pending, 0.025),
    (Status::Declined, 0.025),
];

/// Chance a record sits at the profile's typical location.
const TYPICAL_LOCATION_CHANCE: f64 = 0.80;

/// Chance a record uses one of the profile's preferred merchants.
const PREFERRED_MERCHANT_CHANCE: f64 = 0.60;

/// Coordinate jitter for normal records, degrees.
const LOCATION_JITTER_DEG: f64 = 5.0;

/// Generate the index-th normal transaction inside the window anchored
/// at `anchor`.
pub fn generate(
    index: usize,
    anchor: NaiveDateTime,
    profiles: &mut ProfileStore,
    rng: &mut GenRng,
) -> TransactionRecord {
    let account_id = random_account_id(rng);

    let day = anchor.date() + Duration::days(rng.range_inclusive(0, DAY_SPAN) as i64);
    let timestamp = record::at_clock(
        day,
        rng.range_inclusive(AWAKE_HOURS.0, AWAKE_HOURS.1),
        rng.range_inclusive(0, 59),
        rng.range_inclusive(0, 59),
    );

    let &(lo, hi) = rng.pick_weighted(&AMOUNT_TIERS);
    let amount = record::round2(rng.uniform(lo, hi));

    let profile = profiles.get_or_create(&account_id, rng);

    let base = if rng.chance(TYPICAL_LOCATION_CHANCE) {
        profile.typical_location
    } else {
        catalog::random_location(rng)
    };
    let (latitude, longitude) = catalog::jittered(rng, base, LOCATION_JITTER_DEG);

    let merchant = if rng.chance(PREFERRED_MERCHANT_CHANCE) {
        *rng.pick(&profile.preferred_merchants)
    } else {
        *rng.pick(catalog::everyday_merchants())
    };

    let channel = if merchant.contains(ATM_MARKER) {
        Channel::Atm
    } else {
        *rng.pick_weighted(&CHANNEL_WEIGHTS)
    };

    let status = *rng.pick_weighted(&STATUS_WEIGHTS);
    let transaction_type = *rng.pick(&TransactionType::ALL);

    profile.last_transaction_time = Some(timestamp);

    TransactionRecord {
        transaction_id: normal_txn_id(index),
        account_id,
        timestamp,
        amount,
        merchant_name: merchant.to_string(),
        transaction_type,
        latitude,
        longitude,
        channel,
        status,
    }
}
