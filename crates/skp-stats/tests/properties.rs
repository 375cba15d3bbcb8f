//! Property-based tests for the statistics accumulator.

use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use skp_stats::{CacheStats, StatField, StatKind, StatsSink};

fn kind_strategy() -> impl Strategy<Value = StatKind> {
    prop::sample::select(StatKind::ALL.to_vec())
}

fn stats_strategy() -> impl Strategy<Value = CacheStats> {
    (
        prop::collection::vec((kind_strategy(), 0u64..1_000), 0..20),
        prop::option::of(0u64..4_000_000_000),
    )
        .prop_map(|(ops, created)| {
            let created = created.map(|secs| SystemTime::UNIX_EPOCH + Duration::from_secs(secs));
            ops.into_iter()
                .fold(CacheStats::empty().with_creation_date(created), |s, (k, n)| {
                    s.increment(k, n)
                })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Each kind moves exactly its own counters by `n`.
    #[test]
    fn increment_touches_only_kind_fields(s in stats_strategy(), kind in kind_strategy(), n in 0u64..1_000_000) {
        let updated = s.clone().increment(kind, n);
        for field in StatField::ALL {
            let expected = if kind.fields().contains(&field) {
                s.get(field) + n
            } else {
                s.get(field)
            };
            prop_assert_eq!(updated.get(field), expected, "{} after {}", field, kind);
        }
        prop_assert_eq!(updated.creation_date(), s.creation_date());
    }

    /// Disabled sinks ignore every update.
    #[test]
    fn disabled_sink_is_identity(kind in kind_strategy(), n in 0u64..1_000_000) {
        prop_assert_eq!(StatsSink::Disabled.increment(kind, n), StatsSink::Disabled);
    }

    /// merge(a, b) == merge(b, a)
    #[test]
    fn merge_commutes(a in stats_strategy(), b in stats_strategy()) {
        prop_assert_eq!(a.merge(&b), b.merge(&a));
    }

    /// merge(merge(a, b), c) == merge(a, merge(b, c))
    #[test]
    fn merge_associates(a in stats_strategy(), b in stats_strategy(), c in stats_strategy()) {
        prop_assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    /// Counters add up and the earliest creation date survives.
    #[test]
    fn merge_sums_and_keeps_earliest(a in stats_strategy(), b in stats_strategy()) {
        let merged = a.merge(&b);
        for field in StatField::ALL {
            prop_assert_eq!(merged.get(field), a.get(field) + b.get(field));
        }
        let expected = match (a.creation_date(), b.creation_date()) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (x, y) => x.or(y),
        };
        prop_assert_eq!(merged.creation_date(), expected);
    }

    /// The empty accumulator is a merge identity.
    #[test]
    fn empty_is_merge_identity(a in stats_strategy()) {
        prop_assert_eq!(a.merge(&CacheStats::empty()), a);
    }

    /// Rates are percentages that add up to 100 whenever requests exist.
    #[test]
    fn rates_are_consistent(hits in 0u64..10_000, misses in 0u64..10_000) {
        let report = CacheStats::empty().add_hit(hits).add_miss(misses).finalize();
        prop_assert_eq!(report.request_count(), hits + misses);
        match (report.hit_rate(), report.miss_rate()) {
            (Some(h), Some(m)) => {
                prop_assert!(hits + misses > 0);
                prop_assert!((0.0..=100.0).contains(&h));
                prop_assert!((h + m - 100.0).abs() < 1e-9);
            }
            (None, None) => prop_assert_eq!(hits + misses, 0),
            other => prop_assert!(false, "rates must appear together: {:?}", other),
        }
    }
}

/// Finalize special cases.
#[test]
fn finalize_edge_cases() {
    let zero = CacheStats::empty().finalize();
    assert_eq!(zero.request_count(), 0);
    assert!(zero.get("hitRate").is_none());
    assert!(zero.get("missRate").is_none());

    let misses = CacheStats::empty().add_miss(5).finalize();
    assert_eq!(misses.hit_rate(), Some(0.0));
    assert_eq!(misses.miss_rate(), Some(100.0));

    let hits = CacheStats::empty().add_hit(5).finalize();
    assert_eq!(hits.hit_rate(), Some(100.0));
    assert_eq!(hits.miss_rate(), Some(0.0));
}
