pub mod all_completed;
pub mod sorted_grouping;

pub use all_completed::{AllCompleted, collect_all_completed};
pub use sorted_grouping::{
    SortedGrouping, grouping_by_sorted_key, grouping_by_sorted_key_with, try_grouping_by_sorted_key,
};
