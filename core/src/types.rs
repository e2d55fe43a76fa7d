use crate::{codec::PackerError, headers::HeaderError, ids::IdError, rules::RulesError};

/// Unified error covering identifiers, the byte cursor, rules and headers.
/// - `From<T>` impls enable `?` across an embedding transaction codec.
#[derive(Debug, thiserror::Error)]
pub enum TxBaseError {
    #[error("id error: {0}")]
    Id(#[from] IdError),

    #[error("packer error: {0}")]
    Packer(#[from] PackerError),

    #[error("rules error: {0}")]
    Rules(#[from] RulesError),

    #[error("header error: {0}")]
    Header(#[from] HeaderError),
}
