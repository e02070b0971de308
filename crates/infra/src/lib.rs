// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod pending;

#[cfg(feature = "parallel")]
pub use parallel::collect_parallel;
pub use pending::{Blocking, ChannelHandle, OneshotHandle, ThreadHandle};
