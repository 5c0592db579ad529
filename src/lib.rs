use std::collections::BTreeMap;

use thiserror::Error;

pub mod bench;
pub mod exact;
pub mod greedy;
pub mod report;

/// The fixed coin system, ascending. Contains 1, so every amount is representable.
pub const DENOMINATIONS: [u64; 6] = [1, 2, 5, 10, 25, 50];

/// Largest amount the exact solver accepts. Its tables are sized `amount + 1`,
/// so the cap bounds the per-call allocation.
pub const MAX_AMOUNT: u64 = 10_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangeError {
    #[error("amount {amount} exceeds the exact solver limit of {max}")]
    AmountTooLarge { amount: u64, max: u64 },

    /// Backward reconstruction found no coin recorded for an intermediate sum.
    /// Cannot occur while the denomination set contains 1.
    #[error("no coin combination reaches intermediate amount {amount}")]
    Unreachable { amount: u64 },
}

/// A multiset of coins: denomination -> count. Counts are always positive,
/// and the recorded coins sum to the amount the solver was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown(BTreeMap<u64, u64>);

impl Breakdown {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add `count` coins of `denomination`. Zero counts are ignored so the
    /// map never carries denominations that are not actually used.
    pub fn add(&mut self, denomination: u64, count: u64) {
        if count > 0 {
            *self.0.entry(denomination).or_insert(0) += count;
        }
    }

    pub fn count_of(&self, denomination: u64) -> u64 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins in the multiset.
    pub fn coin_count(&self) -> u64 {
        self.0.values().sum()
    }

    /// Value the coins sum to.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(denomination, count)| denomination * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.0.iter().map(|(&denomination, &count)| (denomination, count))
    }
}

impl FromIterator<(u64, u64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (denomination, count) in iter {
            breakdown.add(denomination, count);
        }
        breakdown
    }
}
