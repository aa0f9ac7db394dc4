//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through one GenRng seeded from the caller's
//! master seed, so the same (seed, anchor, inputs) triple always yields
//! the same dataset. The original tool had no reproducibility contract;
//! the injectable seed closes that gap.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The single deterministic RNG for a generation run.
pub struct GenRng {
    inner: Pcg64Mcg,
}

impl GenRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform integer in [lo, hi], both ends included.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "range must be non-empty");
        lo + self.next_u64_below((hi - lo + 1) as u64) as u32
    }

    /// Pick one element of a non-empty slice uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Sample k distinct indices from [0, len) without replacement.
    /// Partial Fisher-Yates; result order is the shuffle order.
    pub fn sample_indices(&mut self, len: usize, k: usize) -> Vec<usize> {
        assert!(k <= len, "cannot sample {k} distinct from {len}");
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..k {
            let j = i + self.next_u64_below((len - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }

    /// Draw from an explicit discrete distribution given as a weight
    /// table. Returns the index of the first bucket whose cumulative
    /// weight exceeds the roll; the final bucket absorbs any
    /// floating-point residue, so the draw is total for every table with
    /// positive mass.
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "weight table must be non-empty");
        let total: f64 = weights.iter().sum();
        assert!(total > 0.0, "weight table must have positive mass");
        let roll = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return i;
            }
        }
        weights.len() - 1
    }

    /// Draw from a (value, weight) table using the cumulative-weight rule.
    pub fn pick_weighted<'a, T>(&mut self, table: &'a [(T, f64)]) -> &'a T {
        let weights: Vec<f64> = table.iter().map(|(_, w)| *w).collect();
        let index = self.weighted_index(&weights);
        &table[index].0
    }
}
