//! Core types for statistics tracking

mod action;
mod kind;
mod report;
mod sink;
mod stats;

pub use action::CacheAction;
pub use kind::{StatField, StatKind};
pub use report::{StatValue, StatsReport};
pub use sink::{StatsSink, StatsState, increment_stat};
pub use stats::{CacheStats, DEFAULT_AMOUNT};
