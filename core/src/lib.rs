//! txbase-core
//!
//! Transaction base header: validation and canonical binary codec.
//! No I/O beyond loading rule configuration, no global state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod ids;
pub mod codec;
pub mod rules;
pub mod headers;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{Packer, PackerError};
    pub use crate::headers::{HeaderError, TxHeader};
    pub use crate::ids::ChainId;
    pub use crate::rules::{RuleSet, Rules};
    pub use crate::types::TxBaseError;
}
