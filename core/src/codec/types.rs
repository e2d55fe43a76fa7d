use thiserror::Error;

/// Fault recorded by a `Packer`. Once set it sticks until the packer is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackerError {
    /// A write would grow the buffer past its configured limit.
    #[error("packer oversized: need {need} bytes, max {max}")]
    Oversized { need: usize, max: usize },

    /// A read asked for more bytes than remain.
    #[error("insufficient length: need {need} bytes, have {have}")]
    InsufficientLength { need: usize, have: usize },

    /// A required field decoded to its zero value.
    #[error("required field not populated")]
    FieldNotPopulated,

    /// Input had bytes left over after the last expected field.
    #[error("trailing bytes after decode: {remaining}")]
    TrailingBytes { remaining: usize },
}
