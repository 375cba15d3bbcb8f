//! Counter fields and the operation kinds that move them

use std::fmt;
use std::str::FromStr;

use crate::StatsError;

/// A single counter held by [`CacheStats`](crate::CacheStats)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatField {
    /// Total operations observed
    OpCount,
    /// Writes
    SetCount,
    /// Reads that found the key
    HitCount,
    /// Reads that found no key
    MissCount,
    /// Explicit removals
    EvictionCount,
    /// Removals caused by expiry
    ExpiredCount,
}

impl StatField {
    /// Every counter field
    pub const ALL: [StatField; 6] = [
        StatField::OpCount,
        StatField::SetCount,
        StatField::HitCount,
        StatField::MissCount,
        StatField::EvictionCount,
        StatField::ExpiredCount,
    ];

    /// Field name as emitted in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::OpCount => "opCount",
            StatField::SetCount => "setCount",
            StatField::HitCount => "hitCount",
            StatField::MissCount => "missCount",
            StatField::EvictionCount => "evictionCount",
            StatField::ExpiredCount => "expiredCount",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatField {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| StatsError::UnknownField(s.to_string()))
    }
}

/// Semantic kind of a counted cache operation
///
/// Each kind maps to a fixed set of counters that move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Read that found the key
    Hit,
    /// Read that found no key
    Miss,
    /// Write
    Set,
    /// Explicit removal, not counted as an operation
    Eviction,
    /// Removal caused by a TTL boundary
    Expiration,
    /// Anything else (administrative calls, existence checks)
    Op,
}

impl StatKind {
    /// Every operation kind
    pub const ALL: [StatKind; 6] = [
        StatKind::Hit,
        StatKind::Miss,
        StatKind::Set,
        StatKind::Eviction,
        StatKind::Expiration,
        StatKind::Op,
    ];

    /// Counters incremented for this kind, in update order
    pub fn fields(&self) -> &'static [StatField] {
        match self {
            StatKind::Hit => &[StatField::OpCount, StatField::HitCount],
            StatKind::Miss => &[StatField::OpCount, StatField::MissCount],
            StatKind::Set => &[StatField::OpCount, StatField::SetCount],
            StatKind::Eviction => &[StatField::EvictionCount],
            StatKind::Expiration => &[StatField::OpCount, StatField::ExpiredCount],
            StatKind::Op => &[StatField::OpCount],
        }
    }

    /// Get kind as string label
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Hit => "hit",
            StatKind::Miss => "miss",
            StatKind::Set => "set",
            StatKind::Eviction => "eviction",
            StatKind::Expiration => "expiration",
            StatKind::Op => "op",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| StatsError::UnknownKind(s.to_string()))
    }
}
