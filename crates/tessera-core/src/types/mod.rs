//! Payload types with no direct std counterpart.

mod atomic;
mod null;

pub use atomic::AtomicLong;
pub use null::Null;
