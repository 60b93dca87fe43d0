use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out unique, increasing sequence numbers to concurrent callers.
///
/// Shared between emitters through an `Arc`; there is no process-wide instance.
/// Values are unique across threads, but the order in which two threads observe
/// their numbers says nothing about the order their output reaches the console.
#[derive(Debug)]
pub struct SequenceGenerator {
    counter: AtomicU64,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator {
    /// The first value handed out by a fresh generator.
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(Self::FIRST),
        }
    }

    /// Returns the current value and advances the counter in one atomic step.
    pub fn next(&self) -> u64 {
        // Uniqueness only needs the RMW to be atomic, no ordering with other memory.
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}
