// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{BoxError, CollectError, ErrorContext, Result};

pub mod error;
