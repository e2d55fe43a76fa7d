//! telemetry/mod.rs
//! Header processing telemetry: counters and immutable snapshots.
//!
//! Notes:
//! - Counters are plain values owned by the caller; merge per-worker sets at the end.
//! - Snapshots are serializable for reporting.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
