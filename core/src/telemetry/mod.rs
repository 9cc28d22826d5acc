//! telemetry/mod.rs
//! Per-session telemetry: counters, stage timers, and immutable snapshots.
//!
//! Notes:
//! - Counters are plain fields owned by one session, so no atomics or locks.
//! - Snapshots are detached copies that can be serialized for host adapters.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
