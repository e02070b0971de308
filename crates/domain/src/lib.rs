//! # Domain
//!
//! The reduction abstraction and the collector strategies built on it:
//!
//! - [`collector`]: the [`Collector`] trait and the thread-free drivers
//! - [`collectors`]: sorted grouping and pending-computation aggregation
//! - [`model`]: the immutable results those collectors produce
//! - [`config`]: execution settings consumed by the parallel driver

#![allow(clippy::multiple_crate_versions)]

pub mod collector;
pub mod collectors;
pub mod config;
pub mod model;

pub use collector::{Collector, CollectorExt, collect_partitioned, collect_sequential};
pub use collectors::{
    AllCompleted, SortedGrouping, collect_all_completed, grouping_by_sorted_key, grouping_by_sorted_key_with,
    try_grouping_by_sorted_key,
};
pub use config::ExecutionConfig;
pub use model::{GroupedResult, ResolvedResults};
