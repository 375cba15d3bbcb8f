//! Enabled/disabled statistics sink

use super::action::CacheAction;
use super::kind::StatKind;
use super::report::StatsReport;
use super::stats::{CacheStats, DEFAULT_AMOUNT};
use crate::StatsConfig;

/// Where a cache sends its operation counts
///
/// A cache holds one sink and calls it on every operation. When tracking is
/// disabled the sink carries no accumulator and every update is an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatsSink {
    /// Tracking on
    Enabled(CacheStats),
    /// Tracking off
    #[default]
    Disabled,
}

impl StatsSink {
    /// Create a fresh accumulator, or none when `enabled` is false
    pub fn new(enabled: bool) -> Self {
        if enabled {
            StatsSink::Enabled(CacheStats::new())
        } else {
            StatsSink::Disabled
        }
    }

    /// Create a sink from configuration
    pub fn from_config(config: &StatsConfig) -> Self {
        Self::new(config.enabled)
    }

    /// True when an accumulator is present
    pub fn is_enabled(&self) -> bool {
        matches!(self, StatsSink::Enabled(_))
    }

    /// Increment every counter of `kind` by `amount`; no-op when disabled
    pub fn increment(self, kind: StatKind, amount: u64) -> Self {
        match self {
            StatsSink::Enabled(stats) => StatsSink::Enabled(stats.increment(kind, amount)),
            StatsSink::Disabled => StatsSink::Disabled,
        }
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

    /// Count evictions; no-op when disabled
    pub fn add_eviction(self, amount: u64) -> Self {
        self.increment(StatKind::Eviction, amount)
    }

    /// Count expirations; no-op when disabled
    pub fn add_expiration(self, amount: u64) -> Self {
        self.increment(StatKind::Expiration, amount)
    }

    /// Count hits; no-op when disabled
    pub fn add_hit(self, amount: u64) -> Self {
        self.increment(StatKind::Hit, amount)
    }

    /// Count misses; no-op when disabled
    pub fn add_miss(self, amount: u64) -> Self {
        self.increment(StatKind::Miss, amount)
    }

    /// Count generic operations; no-op when disabled
    pub fn add_op(self, amount: u64) -> Self {
        self.increment(StatKind::Op, amount)
    }

    /// Count writes; no-op when disabled
    pub fn add_set(self, amount: u64) -> Self {
        self.increment(StatKind::Set, amount)
    }

    /// Borrow the accumulator, if tracking is on
    pub fn stats(&self) -> Option<&CacheStats> {
        match self {
            StatsSink::Enabled(stats) => Some(stats),
            StatsSink::Disabled => None,
        }
    }

    /// Take the accumulator, if tracking is on
    pub fn into_stats(self) -> Option<CacheStats> {
        match self {
            StatsSink::Enabled(stats) => Some(stats),
            StatsSink::Disabled => None,
        }
    }

    /// Finalize the accumulator, if tracking is on
    pub fn finalize(&self) -> Option<StatsReport> {
        self.stats().map(CacheStats::finalize)
    }
}

impl From<CacheStats> for StatsSink {
    fn from(stats: CacheStats) -> Self {
        StatsSink::Enabled(stats)
    }
}

impl From<Option<CacheStats>> for StatsSink {
    fn from(stats: Option<CacheStats>) -> Self {
        stats.map_or(StatsSink::Disabled, StatsSink::Enabled)
    }
}

/// Caller-owned state that carries a [`StatsSink`]
///
/// Lets a cache thread its whole state through [`increment_stat`] without
/// checking whether tracking is on.
pub trait StatsState {
    /// Mutable access to the embedded sink
    fn stats_sink_mut(&mut self) -> &mut StatsSink;
}

impl StatsState for StatsSink {
    fn stats_sink_mut(&mut self) -> &mut StatsSink {
        self
    }
}

/// Increment the counters of `kind` inside `state` and hand the state back
///
/// When the state's sink is disabled the state is returned unchanged.
pub fn increment_stat<S: StatsState>(mut state: S, kind: StatKind, amount: u64) -> S {
    let sink = state.stats_sink_mut();
    if sink.is_enabled() {
        *sink = std::mem::take(sink).increment(kind, amount);
    }
    state
}
