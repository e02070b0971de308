// crates/infra/src/pending.rs
//! [`PendingComputation`] adapters for the handle types produced by common
//! executors and channels.
//!
//! [`PendingComputation`]: ordered_collect_ports::PendingComputation

mod channel;
mod future;
mod thread;

pub use channel::ChannelHandle;
pub use future::{Blocking, OneshotHandle};
pub use thread::ThreadHandle;
