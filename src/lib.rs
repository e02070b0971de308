//! # ordered_collect
//!
//! Reduction strategies ("collectors") with ordering guarantees that hold
//! under both sequential and parallel folding:
//!
//! - [`grouping_by_sorted_key`] / [`grouping_by_sorted_key_with`] /
//!   [`try_grouping_by_sorted_key`] fold a sequence into a [`GroupedResult`]:
//!   keys ascend, and each key's values keep encounter order.
//! - [`collect_all_completed`] waits for every [`PendingComputation`] in turn
//!   and yields a [`ResolvedResults`] in input order, failing fast on the
//!   first failed computation.
//!
//! Both are plain [`Collector`] values, run by [`collect_sequential`],
//! [`collect_partitioned`] or, with the `parallel` feature, by
//! [`collect_parallel`] on a rayon pool.
//!
//! ```
//! use ordered_collect::prelude::*;
//!
//! let grouped = grouping_by_sorted_key_with(|(k, _): &(u8, char)| *k, |(_, v): (u8, char)| v)
//!     .collect_from([(2, 'b'), (1, 'a'), (1, 'c')])
//!     .unwrap();
//! assert_eq!(grouped.get(&1), Some(&['a', 'c'][..]));
//! assert_eq!(grouped.get(&2), Some(&['b'][..]));
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use ordered_collect_domain::{
    AllCompleted, Collector, CollectorExt, ExecutionConfig, GroupedResult, ResolvedResults, SortedGrouping,
    collect_all_completed, collect_partitioned, collect_sequential, grouping_by_sorted_key,
    grouping_by_sorted_key_with, try_grouping_by_sorted_key,
};
#[cfg(feature = "parallel")]
pub use ordered_collect_infra::collect_parallel;
pub use ordered_collect_infra::{Blocking, ChannelHandle, OneshotHandle, ThreadHandle};
pub use ordered_collect_ports::PendingComputation;
pub use ordered_collect_shared_kernel::{BoxError, CollectError, ErrorContext, Result};

pub mod prelude {
    //! Glob-importable set of the traits and constructors most callers need.

    #[cfg(feature = "parallel")]
    pub use crate::collect_parallel;
    pub use crate::{
        Collector, CollectorExt, ExecutionConfig, PendingComputation, collect_all_completed, collect_sequential,
        grouping_by_sorted_key, grouping_by_sorted_key_with, try_grouping_by_sorted_key,
    };
}
