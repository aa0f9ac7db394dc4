//! Fraud pattern generators.
//!
//! Each generator plants records that deliberately violate one detection
//! heuristic. Everything here is stamped APPROVED (fraud that succeeded)
//! and carries the FRAUD_ id prefix, so ground truth survives into the
//! serialized dataset. Fraud draws are independent of the normal model;
//! incidental resemblance between the two streams is accepted noise.

use crate::catalog;
use crate::profile::random_account_id;
use crate::record::{self, fraud_txn_id, Channel, Status, TransactionRecord, TransactionType};
use crate::rng::GenRng;
use chrono::{Duration, NaiveDate, NaiveDateTime};

// ── Constants ────────────────────────────────────────────────────────────────

/// Day span of the observation window, shared with the normal model.
const DAY_SPAN: u32 = 6;

/// Default coordinate jitter, degrees.
const DEFAULT_JITTER_DEG: f64 = 5.0;

/// High-value: single five-figure outlier.
const HIGH_VALUE_AMOUNT: (f64, f64) = (10_000.0, 50_000.0);
const HIGH_VALUE_JITTER_DEG: f64 = 10.0;

/// High-frequency: burst size bounds and per-record parameters.
const BURST_SIZE: (u32, u32) = (6, 10);
const BURST_JITTER_DEG: f64 = 2.0;
const BURST_AMOUNT: (f64, f64) = (50.0, 1000.0);

/// Multi-location: hop delays in minutes and the shared amount band.
const FIRST_HOP_MINUTES: (u32, u32) = (10, 30);
const SECOND_HOP_MINUTES: (u32, u32) = (5, 15);
const HOP_AMOUNT: (f64, f64) = (100.0, 500.0);

/// Unusual-time: restricted hour band (both ends included) and amounts.
pub const UNUSUAL_HOURS: (u32, u32) = (2, 5);
const UNUSUAL_AMOUNT: (f64, f64) = (1000.0, 5000.0);

/// The four fraud categories, in the assembler's fixed dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudKind {
    HighValue,
    HighFrequency,
    MultipleLocations,
    UnusualTime,
}

impl FraudKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighValue => "high_value",
            Self::HighFrequency => "high_frequency",
            Self::MultipleLocations => "multiple_locations",
            Self::UnusualTime => "unusual_time",
        }
    }
}

/// Dispatch one generator invocation. `index` is the next fraud sequence
/// number; the returned batch consumes len() numbers starting there.
pub fn generate(
    kind: FraudKind,
    index: usize,
    anchor: NaiveDateTime,
    rng: &mut GenRng,
) -> Vec<TransactionRecord> {
    match kind {
        FraudKind::HighValue => vec![high_value(index, anchor, rng)],
        FraudKind::HighFrequency => high_frequency(index, anchor, rng),
        FraudKind::MultipleLocations => multiple_locations(index, anchor, rng),
        FraudKind::UnusualTime => vec![unusual_time(index, anchor, rng)],
    }
}

fn random_day(anchor: NaiveDateTime, rng: &mut GenRng) -> NaiveDate {
    anchor.date() + Duration::days(rng.range_inclusive(0, DAY_SPAN) as i64)
}

/// One transaction with an extreme amount — trips the value rule.
fn high_value(index: usize, anchor: NaiveDateTime, rng: &mut GenRng) -> TransactionRecord {
    let account_id = random_account_id(rng);
    let timestamp = record::at_clock(
        random_day(anchor, rng),
        rng.range_inclusive(0, 23),
        rng.range_inclusive(0, 59),
        0,
    );
    let base = catalog::random_location(rng);
    let (latitude, longitude) = catalog::jittered(rng, base, HIGH_VALUE_JITTER_DEG);

    TransactionRecord {
        transaction_id: fraud_txn_id(index),
        account_id,
        timestamp,
        amount: record::round2(rng.uniform(HIGH_VALUE_AMOUNT.0, HIGH_VALUE_AMOUNT.1)),
        merchant_name: (*rng.pick(catalog::HIGH_TICKET_MERCHANTS)).to_string(),
        transaction_type: TransactionType::Purchase,
        latitude,
        longitude,
        channel: *rng.pick(&[Channel::Online, Channel::Pos]),
        status: Status::Approved,
    }
}

/// A burst of 6–10 transactions for one account, spaced about a minute
/// apart — trips the max-transactions-per-window rule.
fn high_frequency(index: usize, anchor: NaiveDateTime, rng: &mut GenRng) -> Vec<TransactionRecord> {
    let account_id = random_account_id(rng);
    let start = record::at_clock(
        random_day(anchor, rng),
        rng.range_inclusive(0, 23),
        rng.range_inclusive(0, 55),
        0,
    );
    let base = catalog::random_location(rng);
    let count = rng.range_inclusive(BURST_SIZE.0, BURST_SIZE.1);

    (0..count)
        .map(|i| {
            let timestamp = start
                + Duration::minutes(i as i64)
                + Duration::seconds(rng.range_inclusive(0, 59) as i64);
            let (latitude, longitude) = catalog::jittered(rng, base, BURST_JITTER_DEG);
            TransactionRecord {
                transaction_id: fraud_txn_id(index + i as usize),
                account_id: account_id.clone(),
                timestamp,
                amount: record::round2(rng.uniform(BURST_AMOUNT.0, BURST_AMOUNT.1)),
                merchant_name: (*rng.pick(catalog::MERCHANTS)).to_string(),
                transaction_type: *rng.pick(&TransactionType::ALL),
                latitude,
                longitude,
                channel: *rng.pick(&Channel::ALL),
                status: Status::Approved,
            }
        })
        .collect()
}

/// Three transactions hopping coast to coast within minutes — trips the
/// physical travel-time rule.
fn multiple_locations(
    index: usize,
    anchor: NaiveDateTime,
    rng: &mut GenRng,
) -> Vec<TransactionRecord> {
    let account_id = random_account_id(rng);
    let start = record::at_clock(
        random_day(anchor, rng),
        rng.range_inclusive(0, 23),
        rng.range_inclusive(0, 50),
        0,
    );

    let east = catalog::eastern_locations();
    let west = catalog::western_locations();
    let mut records = Vec::with_capacity(3);

    let base = *rng.pick(&east);
    let (latitude, longitude) = catalog::jittered(rng, base, DEFAULT_JITTER_DEG);
    records.push(TransactionRecord {
        transaction_id: fraud_txn_id(index),
        account_id: account_id.clone(),
        timestamp: start,
        amount: record::round2(rng.uniform(HOP_AMOUNT.0, HOP_AMOUNT.1)),
        merchant_name: (*rng.pick(catalog::MERCHANTS)).to_string(),
        transaction_type: TransactionType::Withdrawal,
        latitude,
        longitude,
        channel: Channel::Atm,
        status: Status::Approved,
    });

    // Opposite coast only minutes later.
    let second_at = start
        + Duration::minutes(rng.range_inclusive(FIRST_HOP_MINUTES.0, FIRST_HOP_MINUTES.1) as i64);
    let base = *rng.pick(&west);
    let (latitude, longitude) = catalog::jittered(rng, base, DEFAULT_JITTER_DEG);
    records.push(TransactionRecord {
        transaction_id: fraud_txn_id(index + 1),
        account_id: account_id.clone(),
        timestamp: second_at,
        amount: record::round2(rng.uniform(HOP_AMOUNT.0, HOP_AMOUNT.1)),
        merchant_name: (*rng.pick(catalog::MERCHANTS)).to_string(),
        transaction_type: TransactionType::Withdrawal,
        latitude,
        longitude,
        channel: Channel::Atm,
        status: Status::Approved,
    });

    let third_at = second_at
        + Duration::minutes(rng.range_inclusive(SECOND_HOP_MINUTES.0, SECOND_HOP_MINUTES.1) as i64);
    let base = catalog::random_location(rng);
    let (latitude, longitude) = catalog::jittered(rng, base, DEFAULT_JITTER_DEG);
    records.push(TransactionRecord {
        transaction_id: fraud_txn_id(index + 2),
        account_id,
        timestamp: third_at,
        amount: record::round2(rng.uniform(HOP_AMOUNT.0, HOP_AMOUNT.1)),
        merchant_name: (*rng.pick(catalog::MERCHANTS)).to_string(),
        transaction_type: TransactionType::Purchase,
        latitude,
        longitude,
        channel: *rng.pick(&[Channel::Mobile, Channel::Online]),
        status: Status::Approved,
    });

    records
}

/// One transaction forced into the restricted hour band — trips the
/// off-hours rule.
fn unusual_time(index: usize, anchor: NaiveDateTime, rng: &mut GenRng) -> TransactionRecord {
    let timestamp = record::at_clock(
        random_day(anchor, rng),
        rng.range_inclusive(UNUSUAL_HOURS.0, UNUSUAL_HOURS.1),
        rng.range_inclusive(0, 59),
        0,
    );
    let base = catalog::random_location(rng);
    let (latitude, longitude) = catalog::jittered(rng, base, DEFAULT_JITTER_DEG);

    TransactionRecord {
        transaction_id: fraud_txn_id(index),
        account_id: random_account_id(rng),
        timestamp,
        amount: record::round2(rng.uniform(UNUSUAL_AMOUNT.0, UNUSUAL_AMOUNT.1)),
        merchant_name: (*rng.pick(catalog::MERCHANTS)).to_string(),
        transaction_type: *rng.pick(&[TransactionType::Purchase, TransactionType::Withdrawal]),
        latitude,
        longitude,
        channel: *rng.pick(&[Channel::Mobile, Channel::Online, Channel::Atm]),
        status: Status::Approved,
    }
}
