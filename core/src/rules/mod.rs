//! rules/mod.rs
//! Chain-wide parameters consulted by header validation.
//!
//! Rule values are passed into every `validate` call; nothing here is global,
//! so blocks built under different rule generations can be checked side by side.

pub mod types;

pub use types::*;
