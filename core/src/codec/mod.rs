//! codec/mod.rs
//! Byte cursor used by every wire type in this crate.
//!
//! Responsibilities:
//! - Append fixed-width big-endian integers and fixed-length byte strings
//! - Consume them back in the same order
//! - Record the first fault and turn every later operation into a no-op
//!
//! Non-responsibilities:
//! - Field semantics (timestamps, prices, chain binding)
//! - Length prefixes or variable-width encodings

pub mod types;
pub mod packer;

pub use types::*;
pub use packer::*;
