//! Fixed rule-validation dataset.
//!
//! Hand-placed cases that exercise each detection rule exactly once,
//! for connector smoke tests where a sampled dataset's randomness gets
//! in the way. Ids stay descriptive (FRAUD_HIGH_001, FRAUD_FREQ_000, …)
//! and still honor the fraud-marker prefix contract.

use crate::catalog::round6;
use crate::record::{self, Channel, Status, TransactionRecord, TransactionType};
use crate::rng::GenRng;
use chrono::{Duration, NaiveDateTime};

// Fixed coordinates for the impossible-travel hop sequence.
const HOP_CITIES: [(f64, f64); 4] = [
    (40.7128, -74.0060),   // New York
    (34.0522, -118.2437),  // Los Angeles
    (41.8781, -87.6298),   // Chicago
    (29.7604, -95.3698),   // Houston
];

const NEW_YORK: (f64, f64) = (40.7128, -74.0060);
const LOS_ANGELES: (f64, f64) = (34.0522, -118.2437);

const CONTEXT_MERCHANTS: [&str; 5] =
    ["Walmart", "Target", "Starbucks", "Amazon", "Gas Station"];

/// Build the fixed validation pack anchored at `anchor`. Output is
/// timestamp-sorted like the assembler's.
pub fn rule_validation_pack(anchor: NaiveDateTime, rng: &mut GenRng) -> Vec<TransactionRecord> {
    let mut records = Vec::new();

    // High-value rule: two five-figure purchases.
    records.push(TransactionRecord {
        transaction_id: "FRAUD_HIGH_001".into(),
        account_id: "ACC_FRAUD_001".into(),
        timestamp: anchor + Duration::seconds(1),
        amount: 15_000.00,
        merchant_name: "Luxury Store".into(),
        transaction_type: TransactionType::Purchase,
        latitude: NEW_YORK.0,
        longitude: NEW_YORK.1,
        channel: Channel::Online,
        status: Status::Approved,
    });
    records.push(TransactionRecord {
        transaction_id: "FRAUD_HIGH_002".into(),
        account_id: "ACC_FRAUD_002".into(),
        timestamp: anchor + Duration::seconds(2),
        amount: 25_000.50,
        merchant_name: "Electronics Superstore".into(),
        transaction_type: TransactionType::Purchase,
        latitude: LOS_ANGELES.0,
        longitude: LOS_ANGELES.1,
        channel: Channel::Pos,
        status: Status::Approved,
    });

    // Frequency rule: 8 purchases on one account inside two minutes.
    for i in 0..8u32 {
        records.push(TransactionRecord {
            transaction_id: format!("FRAUD_FREQ_{i:03}"),
            account_id: "ACC_FREQ_001".into(),
            timestamp: anchor + Duration::seconds(10 + i as i64 * 15),
            amount: record::round2(rng.uniform(50.0, 200.0)),
            merchant_name: format!("Store {}", i % 3),
            transaction_type: TransactionType::Purchase,
            latitude: round6(NEW_YORK.0 + i as f64 * 0.001),
            longitude: NEW_YORK.1,
            channel: *rng.pick(&[Channel::Online, Channel::Mobile, Channel::Pos]),
            status: Status::Approved,
        });
    }

    // Travel rule: four cities in four minutes on one account.
    for (i, (latitude, longitude)) in HOP_CITIES.into_iter().enumerate() {
        records.push(TransactionRecord {
            transaction_id: format!("FRAUD_LOC_{i:03}"),
            account_id: "ACC_LOC_001".into(),
            timestamp: anchor + Duration::seconds(150 + i as i64 * 60),
            amount: record::round2(rng.uniform(100.0, 500.0)),
            merchant_name: format!("Store in City {i}"),
            transaction_type: TransactionType::Purchase,
            latitude,
            longitude,
            channel: Channel::Pos,
            status: Status::Approved,
        });
    }

    // Off-hours rule: two records pinned inside the 2–5 AM band.
    let small_hours = record::at_clock(anchor.date(), 3, 30, 0);
    records.push(TransactionRecord {
        transaction_id: "FRAUD_TIME_001".into(),
        account_id: "ACC_TIME_001".into(),
        timestamp: small_hours,
        amount: 1_500.00,
        merchant_name: "24h Gas Station".into(),
        transaction_type: TransactionType::Purchase,
        latitude: NEW_YORK.0,
        longitude: NEW_YORK.1,
        channel: Channel::Pos,
        status: Status::Approved,
    });
    records.push(TransactionRecord {
        transaction_id: "FRAUD_TIME_002".into(),
        account_id: "ACC_TIME_002".into(),
        timestamp: small_hours + Duration::minutes(15),
        amount: 2_500.00,
        merchant_name: "Late Night Store".into(),
        transaction_type: TransactionType::Purchase,
        latitude: LOS_ANGELES.0,
        longitude: LOS_ANGELES.1,
        channel: Channel::Online,
        status: Status::Approved,
    });

    // Normal context traffic over five accounts.
    for i in 0..20u32 {
        records.push(TransactionRecord {
            transaction_id: format!("TXN_NORMAL_{i:03}"),
            account_id: format!("ACC_NORMAL_{:02}", i % 5),
            timestamp: anchor + Duration::seconds(300 + i as i64 * 30),
            amount: record::round2(rng.uniform(10.0, 500.0)),
            merchant_name: (*rng.pick(&CONTEXT_MERCHANTS)).to_string(),
            transaction_type: *rng.pick(&[
                TransactionType::Purchase,
                TransactionType::Withdrawal,
                TransactionType::Payment,
            ]),
            latitude: round6(NEW_YORK.0 + rng.uniform(-0.1, 0.1)),
            longitude: round6(NEW_YORK.1 + rng.uniform(-0.1, 0.1)),
            channel: *rng.pick(&Channel::ALL),
            status: Status::Approved,
        });
    }

    records.sort_by_key(|r| r.timestamp);
    records
}
