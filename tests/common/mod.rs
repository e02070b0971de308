// tests/common/mod.rs
//! Shared fixtures for integration tests.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use ordered_collect::ThreadHandle;

/// Spawns a thread that resolves to `value` after `delay_ms`.
#[allow(dead_code)]
pub fn resolves_after<T: Send + 'static>(value: T, delay_ms: u64) -> ThreadHandle<T, String> {
    ThreadHandle::new(thread::spawn(move || {
        thread::sleep(Duration::from_millis(delay_ms));
        Ok(value)
    }))
}

/// Spawns a thread that fails with `message` after `delay_ms`.
#[allow(dead_code)]
pub fn fails_after<T: Send + 'static>(message: &str, delay_ms: u64) -> ThreadHandle<T, String> {
    let message = message.to_string();
    ThreadHandle::new(thread::spawn(move || {
        thread::sleep(Duration::from_millis(delay_ms));
        Err(message)
    }))
}

/// Counts how many times a key function was invoked.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

#[allow(dead_code)]
impl CallCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
