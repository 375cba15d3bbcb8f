//! Finalized statistics snapshot

use std::time::{SystemTime, UNIX_EPOCH};

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::kind::StatField;
use super::stats::CacheStats;

const CREATION_DATE: &str = "creationDate";
const REQUEST_COUNT: &str = "requestCount";
const HIT_RATE: &str = "hitRate";
const MISS_RATE: &str = "missRate";

/// A single value in a [`StatsReport`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// Raw or derived count
    Count(u64),
    /// Percentage in the 0 to 100 range
    Rate(f64),
    /// Milliseconds since the Unix epoch
    Timestamp(u64),
}

impl StatValue {
    /// Value as a float, whatever its variant
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::Count(n) | StatValue::Timestamp(n) => n as f64,
            StatValue::Rate(r) => r,
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            StatValue::Count(n) | StatValue::Timestamp(n) => serializer.serialize_u64(n),
            StatValue::Rate(r) => serializer.serialize_f64(r),
        }
    }
}

/// Read-only, presentation-ready view of a [`CacheStats`]
///
/// Holds every raw counter, the creation date when known, `requestCount`
/// and, when at least one request was seen, `hitRate` and `missRate`.
/// Entries are ordered reverse-lexicographically by name.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    entries: Vec<(&'static str, StatValue)>,
}

impl StatsReport {
    pub(crate) fn from_stats(stats: &CacheStats) -> Self {
        let mut entries: Vec<(&'static str, StatValue)> = StatField::ALL
            .iter()
            .map(|field| (field.as_str(), StatValue::Count(stats.get(*field))))
            .collect();

        if let Some(created) = stats.creation_date() {
            entries.push((CREATION_DATE, StatValue::Timestamp(epoch_millis(created))));
        }

        let hits = stats.hit_count();
        let misses = stats.miss_count();
        let requests = stats.request_count();
        entries.push((REQUEST_COUNT, StatValue::Count(requests)));

        let rates = if requests == 0 {
            None
        } else if hits == 0 {
            Some((0.0, 100.0))
        } else if misses == 0 {
            Some((100.0, 0.0))
        } else {
            let total = requests as f64;
            Some((100.0 * hits as f64 / total, 100.0 * misses as f64 / total))
        };

        if let Some((hit_rate, miss_rate)) = rates {
            entries.push((HIT_RATE, StatValue::Rate(hit_rate)));
            entries.push((MISS_RATE, StatValue::Rate(miss_rate)));
        }

        entries.sort_unstable_by(|(a, _), (b, _)| b.cmp(a));
        Self { entries }
    }

    /// Look up a value by field name
    pub fn get(&self, name: &str) -> Option<StatValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Look up a raw counter
    pub fn count(&self, field: StatField) -> u64 {
        match self.get(field.as_str()) {
            Some(StatValue::Count(n)) => n,
            _ => 0,
        }
    }

    /// Hits plus misses
    pub fn request_count(&self) -> u64 {
        match self.get(REQUEST_COUNT) {
            Some(StatValue::Count(n)) => n,
            _ => 0,
        }
    }

    /// Hit percentage, absent when no request was seen
    pub fn hit_rate(&self) -> Option<f64> {
        self.get(HIT_RATE).map(|v| v.as_f64())
    }

    /// Miss percentage, absent when no request was seen
    pub fn miss_rate(&self) -> Option<f64> {
        self.get(MISS_RATE).map(|v| v.as_f64())
    }

    /// Creation date in milliseconds since the Unix epoch
    pub fn creation_date(&self) -> Option<u64> {
        match self.get(CREATION_DATE) {
            Some(StatValue::Timestamp(ms)) => Some(ms),
            _ => None,
        }
    }

    /// Iterate entries in report order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, StatValue)> + '_ {
        self.entries.iter().copied()
    }

    /// Field names in report order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the report has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the report as a JSON object
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::StatsError::Serialization(e.to_string()))
    }
}

impl Serialize for StatsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn epoch_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
