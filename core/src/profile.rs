//! Per-account behavioral profiles.
//!
//! A profile makes one account's normal transactions internally
//! consistent: it pins a typical location, an average-spend seed, and a
//! small preferred-merchant subset on first sight of the account id.
//! Profiles are owned by a single generation run and die with it.

use crate::catalog::{self, Location};
use crate::rng::GenRng;
use chrono::NaiveDateTime;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Size of the bounded account-id space. Re-drawing an existing id is
/// account reuse (repeat customers), which is intended.
pub const ACCOUNT_SPACE: u64 = 100;

/// Number of preferred merchants pinned per account.
pub const PREFERRED_MERCHANTS: usize = 5;

/// Bounds of the average-amount seed drawn at profile creation.
pub const AVG_AMOUNT_RANGE: (f64, f64) = (50.0, 500.0);

/// Draw an account id from the bounded space.
pub fn random_account_id(rng: &mut GenRng) -> String {
    format!("ACC_{:04}", rng.next_u64_below(ACCOUNT_SPACE) + 1)
}

/// Behavioral baseline for one account.
#[derive(Debug, Clone)]
pub struct AccountProfile {
    pub typical_location: &'static Location,
    /// Spend amplitude seed. Informational; the amount mixture is global.
    pub avg_amount: f64,
    pub preferred_merchants: Vec<&'static str>,
    /// Most recent normal transaction. Bookkeeping only; ordering is
    /// enforced by the assembler's final sort, not here.
    pub last_transaction_time: Option<NaiveDateTime>,
}

/// Lazily keyed profile map for one generation run.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, AccountProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the profile for an account id, creating it on first
    /// sight. The same id always returns the same profile within one
    /// store's lifetime.
    pub fn get_or_create(&mut self, account_id: &str, rng: &mut GenRng) -> &mut AccountProfile {
        match self.profiles.entry(account_id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let typical_location = catalog::random_location(rng);
                let avg_amount = rng.uniform(AVG_AMOUNT_RANGE.0, AVG_AMOUNT_RANGE.1);
                let everyday = catalog::everyday_merchants();
                let preferred_merchants = rng
                    .sample_indices(everyday.len(), PREFERRED_MERCHANTS)
                    .into_iter()
                    .map(|i| everyday[i])
                    .collect();
                entry.insert(AccountProfile {
                    typical_location,
                    avg_amount,
                    preferred_merchants,
                    last_transaction_time: None,
                })
            }
        }
    }

    /// Number of distinct accounts seen so far.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
