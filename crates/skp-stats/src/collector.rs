//! Multi-producer statistics collector

use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

use skp_stats_core::{CacheStats, StatsReport, StatsSink};

/// Counts of producers that have left, and their names
#[derive(Debug, Default)]
struct Retired {
    baseline: CacheStats,
    names: HashSet<String>,
}

/// Gathers accumulators from independent producers and merges them on demand
///
/// Each producer owns its own [`CacheStats`] and periodically publishes it.
/// Published values are cumulative, so a new publication replaces the
/// producer's previous one instead of being added to it.
///
/// A retired producer name is closed: its counts already live in the
/// baseline, so later publications under that name are refused until
/// [`StatsCollector::clear`].
/// Cloning creates a new handle to the SAME underlying store.
#[derive(Clone, Default)]
pub struct StatsCollector {
    /// Latest accumulator per live producer
    producers: Arc<DashMap<String, CacheStats>>,
    /// Merged accumulators of retired producers
    retired: Arc<RwLock<Retired>>,
}

impl StatsCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest accumulator for `producer`
    ///
    /// Returns `false` and drops `stats` when `producer` has been retired.
    pub fn publish(&self, producer: impl Into<String>, stats: CacheStats) -> bool {
        let producer = producer.into();
        // Held across the insert so a concurrent retire sees either both or neither
        let retired = self.retired.read();
        if retired.names.contains(&producer) {
            debug!(
                target: "skp_stats",
                event = "publish_refused",
                producer = %producer,
                "Stats Publish After Retire Ignored"
            );
            return false;
        }
        trace!(
            target: "skp_stats",
            event = "publish",
            producer = %producer,
            op_count = stats.op_count(),
            "Stats Published"
        );
        self.producers.insert(producer, stats);
        true
    }

    /// Publish the accumulator held by `sink`
    ///
    /// Returns `false` without touching the collector when the sink is disabled
    /// or the producer has been retired.
    pub fn publish_sink(&self, producer: impl Into<String>, sink: &StatsSink) -> bool {
        match sink.stats() {
            Some(stats) => self.publish(producer, stats.clone()),
            None => false,
        }
    }

    /// Fold a producer's last accumulator into the retained baseline
    ///
    /// Returns `false` if the producer never published or is already retired.
    pub fn retire(&self, producer: &str) -> bool {
        // Hold the baseline lock across the move so snapshots never miss it
        let mut retired = self.retired.write();
        match self.producers.remove(producer) {
            Some((_, stats)) => {
                retired.baseline = retired.baseline.merge(&stats);
                retired.names.insert(producer.to_string());
                debug!(
                    target: "skp_stats",
                    event = "retire",
                    producer = %producer,
                    "Stats Producer Retired"
                );
                true
            }
            None => false,
        }
    }

    /// True if `producer` has been retired
    pub fn is_retired(&self, producer: &str) -> bool {
        self.retired.read().names.contains(producer)
    }

    /// Merge the baseline with every live producer
    pub fn snapshot(&self) -> CacheStats {
        let retired = self.retired.read();
        self.producers
            .iter()
            .fold(retired.baseline.clone(), |acc, entry| acc.merge(entry.value()))
    }

    /// Finalize the merged view of all producers
    pub fn finalize(&self) -> StatsReport {
        self.snapshot().finalize()
    }

    /// Names of live producers, sorted
    pub fn producers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.producers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of live producers
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    /// True when no producer is live
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Forget every producer, the retained baseline and retired names
    pub fn clear(&self) {
        let mut retired = self.retired.write();
        self.producers.clear();
        *retired = Retired::default();
        debug!(target: "skp_stats", event = "clear", "Stats Collector Cleared");
    }
}

impl std::fmt::Debug for StatsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsCollector")
            .field("producers", &self.producers.len())
            .finish()
    }
}
