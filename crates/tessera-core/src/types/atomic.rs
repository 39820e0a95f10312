use crate::payload::{Number, RawView};
use std::{
    fmt,
    sync::atomic::{AtomicI64, Ordering},
};

///
/// AtomicLong
///
/// 64-bit atomic counter payload.
///
/// Cloning takes a snapshot of the current value and equality compares
/// current values, so two counters holding the same count are equal.
///

#[derive(Debug, Default)]
pub struct AtomicLong(AtomicI64);

impl AtomicLong {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(AtomicI64::new(value))
    }

    #[must_use]
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, value: i64) {
        self.0.store(value, Ordering::SeqCst);
    }

    /// Add `delta` and return the updated value.
    pub fn add_and_get(&self, delta: i64) -> i64 {
        self.0.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta)
    }

    pub fn increment_and_get(&self) -> i64 {
        self.add_and_get(1)
    }
}

impl Clone for AtomicLong {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl PartialEq for AtomicLong {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for AtomicLong {}

impl From<i64> for AtomicLong {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AtomicLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

crate::impl_payload!(AtomicLong, |counter| RawView::Number(Number::Signed(
    counter.get()
)));
