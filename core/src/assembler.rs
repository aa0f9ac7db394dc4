//! Dataset assembly — the public entry point of the generator.
//!
//! Partitions the request into normal and fraud work, dispatches the
//! generators, and orders the combined output chronologically.
//!
//! RULES:
//!   - Inputs are validated before any record is produced; generation
//!     itself cannot fail.
//!   - Account profiles are created fresh per generate() call and
//!     discarded with it.
//!   - Fraud mix proportions are fixed and floored per category; batch
//!     generators may overshoot the nominal fraud count. Both are
//!     documented dataset properties, not corrected.

use crate::error::{GenError, GenResult};
use crate::fraud::{self, FraudKind};
use crate::normal;
use crate::profile::ProfileStore;
use crate::record::TransactionRecord;
use crate::rng::GenRng;
use chrono::{Duration, NaiveDateTime, Utc};

/// Fixed fraud-category mix, dispatched in this order.
const FRAUD_MIX: [(FraudKind, f64); 4] = [
    (FraudKind::HighValue, 0.30),
    (FraudKind::HighFrequency, 0.30),
    (FraudKind::MultipleLocations, 0.25),
    (FraudKind::UnusualTime, 0.15),
];

/// Days of history the default anchor sits behind the current time.
const WINDOW_DAYS: i64 = 7;

pub struct TransactionGenerator {
    rng: GenRng,
    anchor: NaiveDateTime,
}

impl TransactionGenerator {
    /// Generator anchored WINDOW_DAYS behind the current UTC time.
    pub fn new(seed: u64) -> Self {
        Self::with_anchor(seed, Utc::now().naive_utc() - Duration::days(WINDOW_DAYS))
    }

    /// Generator with an explicit time anchor. The same (seed, anchor)
    /// pair always yields the same dataset.
    pub fn with_anchor(seed: u64, anchor: NaiveDateTime) -> Self {
        Self {
            rng: GenRng::new(seed),
            anchor,
        }
    }

    /// Produce a chronologically ordered labeled dataset.
    ///
    /// `fraud_ratio` is the target fraction of `total_count` that should
    /// belong to a fraud pattern. The realized fraud-record count may
    /// differ: per-category floors undershoot the nominal target and
    /// batch generators overshoot it, so the output length is not
    /// guaranteed to equal `total_count` when `fraud_ratio > 0`.
    pub fn generate(
        &mut self,
        total_count: usize,
        fraud_ratio: f64,
    ) -> GenResult<Vec<TransactionRecord>> {
        if total_count == 0 {
            return Err(GenError::InvalidTotalCount { actual: total_count });
        }
        if !(0.0..=1.0).contains(&fraud_ratio) {
            return Err(GenError::InvalidFraudRatio { actual: fraud_ratio });
        }

        let fraud_count = (total_count as f64 * fraud_ratio).floor() as usize;
        let normal_count = total_count - fraud_count;

        // Profiles are scoped to this invocation; nothing leaks between runs.
        let mut profiles = ProfileStore::new();
        let mut records = Vec::with_capacity(total_count);

        for index in 0..normal_count {
            records.push(normal::generate(index, self.anchor, &mut profiles, &mut self.rng));
        }
        log::debug!(
            "generated {normal_count} normal records across {} accounts",
            profiles.len()
        );

        let mut fraud_index = 1;
        for (kind, share) in FRAUD_MIX {
            let invocations = (fraud_count as f64 * share).floor() as usize;
            for _ in 0..invocations {
                let batch = fraud::generate(kind, fraud_index, self.anchor, &mut self.rng);
                fraud_index += batch.len();
                records.extend(batch);
            }
            log::debug!("fraud mix {}: {invocations} invocations", kind.name());
        }

        // Stable sort; the zero-padded wire format makes chronological
        // and lexicographic order identical, and ties keep emission order.
        records.sort_by_key(|r| r.timestamp);
        Ok(records)
    }
}
