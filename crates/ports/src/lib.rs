//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`pending`]: Blocking access to the outcome of an already-submitted
//!   asynchronous computation
//!
//! These ports allow the collector strategies to remain independent of any
//! specific executor, channel or future implementation.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod pending;

pub use pending::PendingComputation;
