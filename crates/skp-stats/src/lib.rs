//! skp-stats: Mergeable operation statistics for caches
//!
//! # Features
//!
//! - **Value-type accumulator** counting hits, misses, writes, evictions and expirations
//! - **No-op sink** when tracking is disabled, with no branching at call sites
//! - **Commutative merge** for combining counts from independent producers
//! - **Finalized reports** with request count and hit/miss percentages
//!
//! # Quick Start
//!
//! ```rust
//! use skp_stats::prelude::*;
//!
//! let sink = StatsSink::from_config(&StatsConfig::enabled())
//!     .register(CacheAction::Set)
//!     .register(CacheAction::Get { found: true })
//!     .register(CacheAction::Get { found: false });
//!
//! let report = sink.finalize().expect("tracking enabled");
//! assert_eq!(report.request_count(), 2);
//! assert_eq!(report.hit_rate(), Some(50.0));
//! ```

mod collector;

// Re-export core
pub use skp_stats_core::*;

// Export collector
pub use collector::StatsCollector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CacheAction, CacheStats, Result, StatKind, StatValue, StatsCollector, StatsConfig,
        StatsError, StatsReport, StatsSink, StatsState, increment_stat,
    };
}
