pub mod grouped;
pub mod resolved;

pub use grouped::GroupedResult;
pub use resolved::ResolvedResults;
