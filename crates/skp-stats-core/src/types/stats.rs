//! Cache statistics accumulator

use std::iter::Sum;
use std::ops::Add;
use std::time::SystemTime;

use super::action::CacheAction;
use super::kind::{StatField, StatKind};
use super::report::StatsReport;

/// Amount used when an operation is recorded without an explicit count
pub const DEFAULT_AMOUNT: u64 = 1;

/// Counters for the operations performed against one cache
///
/// A value type: every update consumes the accumulator and returns the
/// updated one. Copies updated by different producers are combined with
/// [`CacheStats::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    op_count: u64,
    set_count: u64,
    hit_count: u64,
    miss_count: u64,
    eviction_count: u64,
    expired_count: u64,
    creation_date: Option<SystemTime>,
}

impl CacheStats {
    /// Create a zeroed accumulator stamped with the current time
    pub fn new() -> Self {
        Self::empty().with_creation_date(Some(SystemTime::now()))
    }

    /// Create a zeroed accumulator without a creation date
    ///
    /// This is the identity for [`CacheStats::merge`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the creation date
    pub fn with_creation_date(mut self, creation_date: Option<SystemTime>) -> Self {
        self.creation_date = creation_date;
        self
    }

    /// Increment every counter of `kind` by `amount` in one update
    pub fn increment(mut self, kind: StatKind, amount: u64) -> Self {
        for field in kind.fields() {
            let counter = self.counter_mut(*field);
            *counter = counter.saturating_add(amount);
        }
        self
    }

    /// Record a single operation of `kind`
    pub fn record(self, kind: StatKind) -> Self {
        self.increment(kind, DEFAULT_AMOUNT)
    }

    /// Apply the counters a performed cache action maps to
    pub fn register(self, action: CacheAction) -> Self {
        let (kind, amount) = action.stat();
        self.increment(kind, amount)
    }

    /// Count evictions (does not touch `opCount`)
    pub fn add_eviction(self, amount: u64) -> Self {
        self.increment(StatKind::Eviction, amount)
    }

    /// Count expirations
    pub fn add_expiration(self, amount: u64) -> Self {
        self.increment(StatKind::Expiration, amount)
    }

    /// Count hits
    pub fn add_hit(self, amount: u64) -> Self {
        self.increment(StatKind::Hit, amount)
    }

    /// Count misses
    pub fn add_miss(self, amount: u64) -> Self {
        self.increment(StatKind::Miss, amount)
    }

    /// Count generic operations
    pub fn add_op(self, amount: u64) -> Self {
        self.increment(StatKind::Op, amount)
    }

    /// Count writes
    pub fn add_set(self, amount: u64) -> Self {
        self.increment(StatKind::Set, amount)
    }

    /// Read a counter
    pub fn get(&self, field: StatField) -> u64 {
        match field {
            StatField::OpCount => self.op_count,
            StatField::SetCount => self.set_count,
            StatField::HitCount => self.hit_count,
            StatField::MissCount => self.miss_count,
            StatField::EvictionCount => self.eviction_count,
            StatField::ExpiredCount => self.expired_count,
        }
    }

    fn counter_mut(&mut self, field: StatField) -> &mut u64 {
        match field {
            StatField::OpCount => &mut self.op_count,
            StatField::SetCount => &mut self.set_count,
            StatField::HitCount => &mut self.hit_count,
            StatField::MissCount => &mut self.miss_count,
            StatField::EvictionCount => &mut self.eviction_count,
            StatField::ExpiredCount => &mut self.expired_count,
        }
    }

    /// Total operations observed
    pub fn op_count(&self) -> u64 {
        self.op_count
    }

    /// Writes
    pub fn set_count(&self) -> u64 {
        self.set_count
    }

    /// Reads that found the key
    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    /// Reads that found no key
    pub fn miss_count(&self) -> u64 {
        self.miss_count
    }

    /// Explicit removals
    pub fn eviction_count(&self) -> u64 {
        self.eviction_count
    }

    /// Removals caused by expiry
    pub fn expired_count(&self) -> u64 {
        self.expired_count
    }

    /// When this accumulator (or the earliest of those merged into it) began
    pub fn creation_date(&self) -> Option<SystemTime> {
        self.creation_date
    }

    /// Total requests (hits + misses)
    pub fn request_count(&self) -> u64 {
        self.hit_count.saturating_add(self.miss_count)
    }

    /// Combine two accumulators into a new one
    ///
    /// Counters are summed. The creation date is the earlier of the two; a
    /// present date always wins over an absent one.
    pub fn merge(&self, other: &CacheStats) -> CacheStats {
        let mut merged = CacheStats::empty();
        for field in StatField::ALL {
            *merged.counter_mut(field) = self.get(field).saturating_add(other.get(field));
        }
        merged.creation_date = match (self.creation_date, other.creation_date) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        merged
    }

    /// Build the presentation snapshot with derived request and rate fields
    pub fn finalize(&self) -> StatsReport {
        StatsReport::from_stats(self)
    }
}

impl Add for CacheStats {
    type Output = CacheStats;

    fn add(self, rhs: CacheStats) -> CacheStats {
        self.merge(&rhs)
    }
}

impl Sum for CacheStats {
    fn sum<I: Iterator<Item = CacheStats>>(iter: I) -> Self {
        iter.fold(CacheStats::empty(), |acc, stats| acc.merge(&stats))
    }
}

impl<'a> Sum<&'a CacheStats> for CacheStats {
    fn sum<I: Iterator<Item = &'a CacheStats>>(iter: I) -> Self {
        iter.fold(CacheStats::empty(), |acc, stats| acc.merge(stats))
    }
}
