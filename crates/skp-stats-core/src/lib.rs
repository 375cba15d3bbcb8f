//! skp-stats-core: Statistics accumulator types for skp-stats
//!
//! This crate provides the pure value types used to count cache operations,
//! combine independently gathered counts and derive hit/miss rates.

mod config;
mod error;
mod types;

pub use config::StatsConfig;
pub use error::{Result, StatsError};
pub use types::*;
