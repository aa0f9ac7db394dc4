//! Per-pattern guarantees for the four fraud generators.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use fraudgen_core::catalog::{eastern_locations, western_locations, EAST_WEST_SPLIT, LOCATIONS};
use fraudgen_core::fraud::{self, FraudKind, UNUSUAL_HOURS};
use fraudgen_core::record::FRAUD_ID_PREFIX;
use fraudgen_core::{Channel, GenRng, Status, TransactionType};

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn high_value_records_carry_extreme_amounts() {
    for seed in 0..50 {
        let mut rng = GenRng::new(seed);
        let batch = fraud::generate(FraudKind::HighValue, 1, anchor(), &mut rng);
        assert_eq!(batch.len(), 1);
        let r = &batch[0];
        assert!(
            (10_000.0..=50_000.0).contains(&r.amount),
            "seed {seed}: amount {} outside the outlier band",
            r.amount
        );
        assert_eq!(r.transaction_type, TransactionType::Purchase);
        assert!(r.channel == Channel::Online || r.channel == Channel::Pos);
    }
}

#[test]
fn high_frequency_bursts_share_one_account_and_a_short_window() {
    for seed in 0..50 {
        let mut rng = GenRng::new(seed);
        let batch = fraud::generate(FraudKind::HighFrequency, 1, anchor(), &mut rng);

        assert!(
            (6..=10).contains(&batch.len()),
            "seed {seed}: burst size {}",
            batch.len()
        );
        let account = &batch[0].account_id;
        assert!(batch.iter().all(|r| &r.account_id == account));

        let start = batch.iter().map(|r| r.timestamp).min().unwrap();
        let end = batch.iter().map(|r| r.timestamp).max().unwrap();
        assert!(
            (end - start).num_minutes() < 10,
            "seed {seed}: burst spans more than ~10 minutes"
        );
    }
}

#[test]
fn high_frequency_ids_are_sequential() {
    let mut rng = GenRng::new(17);
    let batch = fraud::generate(FraudKind::HighFrequency, 5, anchor(), &mut rng);
    for (i, r) in batch.iter().enumerate() {
        assert_eq!(r.transaction_id, format!("FRAUD_{:03}", 5 + i));
    }
}

#[test]
fn multiple_locations_hops_coast_to_coast() {
    for seed in 0..50 {
        let mut rng = GenRng::new(seed);
        let batch = fraud::generate(FraudKind::MultipleLocations, 1, anchor(), &mut rng);

        assert_eq!(batch.len(), 3, "seed {seed}");
        let account = &batch[0].account_id;
        assert!(batch.iter().all(|r| &r.account_id == account));

        // First two hops are ATM withdrawals minutes apart; the gap is
        // far below any plausible cross-country travel time.
        assert_eq!(batch[0].transaction_type, TransactionType::Withdrawal);
        assert_eq!(batch[0].channel, Channel::Atm);
        assert_eq!(batch[1].transaction_type, TransactionType::Withdrawal);
        assert_eq!(batch[1].channel, Channel::Atm);
        let first_gap = (batch[1].timestamp - batch[0].timestamp).num_minutes();
        assert!((10..=30).contains(&first_gap), "seed {seed}: gap {first_gap}");
        let second_gap = (batch[2].timestamp - batch[1].timestamp).num_minutes();
        assert!((5..=15).contains(&second_gap), "seed {seed}: gap {second_gap}");

        assert_eq!(batch[2].transaction_type, TransactionType::Purchase);
        assert!(batch[2].channel == Channel::Mobile || batch[2].channel == Channel::Online);
    }
}

#[test]
fn east_and_west_pools_are_disjoint_and_cover_the_table() {
    // The travel pattern's geographic guarantee rests on this split.
    let east = eastern_locations();
    let west = western_locations();
    assert_eq!(east.len() + west.len(), LOCATIONS.len());
    assert!(east.iter().all(|l| l.longitude > EAST_WEST_SPLIT));
    assert!(west.iter().all(|l| l.longitude <= EAST_WEST_SPLIT));
}

#[test]
fn unusual_time_records_sit_in_the_restricted_band() {
    for seed in 0..100 {
        let mut rng = GenRng::new(seed);
        let batch = fraud::generate(FraudKind::UnusualTime, 1, anchor(), &mut rng);
        assert_eq!(batch.len(), 1);
        let r = &batch[0];
        let hour = r.timestamp.hour();
        assert!(
            (UNUSUAL_HOURS.0..=UNUSUAL_HOURS.1).contains(&hour),
            "seed {seed}: hour {hour} outside [2, 5]"
        );
        assert!(
            (1_000.0..=5_000.0).contains(&r.amount),
            "seed {seed}: amount {}",
            r.amount
        );
    }
}

#[test]
fn every_fraud_record_is_approved_and_marked() {
    let kinds = [
        FraudKind::HighValue,
        FraudKind::HighFrequency,
        FraudKind::MultipleLocations,
        FraudKind::UnusualTime,
    ];
    for seed in 0..20 {
        for kind in kinds {
            let mut rng = GenRng::new(seed);
            for r in fraud::generate(kind, 1, anchor(), &mut rng) {
                assert_eq!(r.status, Status::Approved, "{}: {kind:?}", r.transaction_id);
                assert!(
                    r.transaction_id.starts_with(FRAUD_ID_PREFIX),
                    "{}: missing fraud marker",
                    r.transaction_id
                );
                assert!(r.is_fraud());
            }
        }
    }
}
