//! headers/mod.rs
//! Transaction base header: the envelope fields every transaction shares.
//!
//! Notes:
//! - Fixed-size header (48 bytes) so it can be embedded inline without a length prefix.
//! - Encoding is canonical; the bytes are hashed and signed with the transaction.
//! - Decoding checks only timestamp alignment. Everything else needs chain
//!   context and is left to `TxHeader::validate`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
