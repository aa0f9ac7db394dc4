//! Account profile store contracts.

use chrono::{NaiveDate, NaiveDateTime};
use fraudgen_core::catalog::{everyday_merchants, ATM_MARKER};
use fraudgen_core::normal;
use fraudgen_core::profile::{
    random_account_id, ProfileStore, ACCOUNT_SPACE, AVG_AMOUNT_RANGE, PREFERRED_MERCHANTS,
};
use fraudgen_core::GenRng;

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 10)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn same_account_returns_the_same_profile() {
    let mut store = ProfileStore::new();
    let mut rng = GenRng::new(42);

    let (location, merchants, avg) = {
        let p = store.get_or_create("ACC_0007", &mut rng);
        (
            p.typical_location.name,
            p.preferred_merchants.clone(),
            p.avg_amount,
        )
    };

    // Creating other profiles in between must not disturb the first.
    for i in 0..20 {
        store.get_or_create(&format!("ACC_{i:04}"), &mut rng);
    }

    let p = store.get_or_create("ACC_0007", &mut rng);
    assert_eq!(p.typical_location.name, location);
    assert_eq!(p.preferred_merchants, merchants);
    assert_eq!(p.avg_amount, avg);
}

#[test]
fn profile_creation_respects_the_sampling_contracts() {
    let mut store = ProfileStore::new();
    let mut rng = GenRng::new(7);

    for i in 1..=100 {
        let id = format!("ACC_{i:04}");
        let p = store.get_or_create(&id, &mut rng);

        assert!(
            (AVG_AMOUNT_RANGE.0..AVG_AMOUNT_RANGE.1).contains(&p.avg_amount),
            "{id}: avg amount {} outside seed range",
            p.avg_amount
        );

        assert_eq!(p.preferred_merchants.len(), PREFERRED_MERCHANTS);
        let mut distinct = p.preferred_merchants.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(
            distinct.len(),
            PREFERRED_MERCHANTS,
            "{id}: duplicate preferred merchant"
        );
        for m in &p.preferred_merchants {
            assert!(everyday_merchants().contains(m), "{id}: {m} not everyday");
            assert!(!m.contains(ATM_MARKER), "{id}: ATM merchant preferred");
        }
        assert!(p.last_transaction_time.is_none());
    }
    assert_eq!(store.len(), 100);
}

#[test]
fn account_ids_stay_in_the_bounded_space() {
    let mut rng = GenRng::new(3);
    for _ in 0..1_000 {
        let id = random_account_id(&mut rng);
        let n: u64 = id
            .strip_prefix("ACC_")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("malformed account id {id}"));
        assert!((1..=ACCOUNT_SPACE).contains(&n), "{id} outside space");
    }
}

#[test]
fn normal_generation_touches_the_profile_bookkeeping() {
    let mut store = ProfileStore::new();
    let mut rng = GenRng::new(11);

    let record = normal::generate(0, anchor(), &mut store, &mut rng);
    let profile = store.get_or_create(&record.account_id, &mut rng);
    assert_eq!(
        profile.last_transaction_time,
        Some(record.timestamp),
        "last-transaction bookkeeping not updated"
    );
}
