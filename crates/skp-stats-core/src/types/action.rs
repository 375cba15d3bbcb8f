//! Mapping from performed cache actions to counted operations

use super::kind::StatKind;

/// A cache operation as performed, including its outcome
///
/// The cache reports what it did; the mapping to counters lives here so every
/// cache counts the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheAction {
    /// Lookup of a single key
    Get { found: bool },
    /// Write of a single key
    Set,
    /// Explicit removal of a single key
    Delete,
    /// Removal of expired entries
    Purge { removed: u64 },
    /// Removal of every entry
    Clear { removed: u64 },
    /// Existence check
    Exists,
    /// TTL lookup
    Ttl,
    /// Size query
    Size,
    /// Any other administrative call
    Other,
}

impl CacheAction {
    /// Operation kind and amount this action is counted as
    pub fn stat(&self) -> (StatKind, u64) {
        match *self {
            CacheAction::Get { found: true } => (StatKind::Hit, 1),
            CacheAction::Get { found: false } => (StatKind::Miss, 1),
            CacheAction::Set => (StatKind::Set, 1),
            CacheAction::Delete => (StatKind::Eviction, 1),
            CacheAction::Purge { removed } => (StatKind::Expiration, removed),
            CacheAction::Clear { removed } => (StatKind::Eviction, removed),
            CacheAction::Exists | CacheAction::Ttl | CacheAction::Size | CacheAction::Other => {
                (StatKind::Op, 1)
            }
        }
    }

    /// Get action as string label
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheAction::Get { .. } => "get",
            CacheAction::Set => "set",
            CacheAction::Delete => "delete",
            CacheAction::Purge { .. } => "purge",
            CacheAction::Clear { .. } => "clear",
            CacheAction::Exists => "exists",
            CacheAction::Ttl => "ttl",
            CacheAction::Size => "size",
            CacheAction::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheStats;

    #[test]
    fn test_get_outcome() {
        assert_eq!(CacheAction::Get { found: true }.stat(), (StatKind::Hit, 1));
        assert_eq!(CacheAction::Get { found: false }.stat(), (StatKind::Miss, 1));
    }

    #[test]
    fn test_bulk_removals_carry_amount() {
        assert_eq!(
            CacheAction::Purge { removed: 12 }.stat(),
            (StatKind::Expiration, 12)
        );
        assert_eq!(
            CacheAction::Clear { removed: 4 }.stat(),
            (StatKind::Eviction, 4)
        );
    }

    #[test]
    fn test_register_sequence() {
        let stats = [
            CacheAction::Set,
            CacheAction::Get { found: true },
            CacheAction::Get { found: false },
            CacheAction::Delete,
            CacheAction::Purge { removed: 2 },
            CacheAction::Exists,
        ]
        .into_iter()
        .fold(CacheStats::empty(), CacheStats::register);

        assert_eq!(stats.set_count(), 1);
        assert_eq!(stats.hit_count(), 1);
        assert_eq!(stats.miss_count(), 1);
        assert_eq!(stats.eviction_count(), 1);
        assert_eq!(stats.expired_count(), 2);
        // set + hit + miss + 2 expirations + exists; delete is not an op
        assert_eq!(stats.op_count(), 6);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CacheAction::Get { found: true }.as_str(), "get");
        assert_eq!(CacheAction::Purge { removed: 0 }.as_str(), "purge");
    }
}
