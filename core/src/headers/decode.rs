//! src/headers/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Exact inverse of `encode.rs`: same order, same widths.
//! - Alignment is checked right after the timestamp so malformed input is
//!   rejected before the remaining 40 bytes are interpreted.
//! - Window, chain and price checks need chain context and stay in `validate`.

use crate::codec::Packer;
use crate::headers::types::{check_alignment, HeaderError, TxHeader};

impl TxHeader {
    /// Read a header from `p`.
    ///
    /// Surfaces any fault on the packer, including one recorded by an earlier
    /// read. Never returns a partially populated header.
    pub fn decode(p: &mut Packer) -> Result<TxHeader, HeaderError> {
        let start = p.offset();

        let timestamp = p.unpack_i64(false);
        if let Err(e) = check_alignment(timestamp) {
            tracing::debug!(timestamp, offset = start, "misaligned header timestamp");
            return Err(e);
        }
        let chain_id = p.unpack_id(false);
        let unit_price = p.unpack_u64(false);

        if let Err(e) = p.check() {
            tracing::debug!(offset = start, error = %e, "malformed tx header");
            return Err(HeaderError::MalformedInput(e));
        }

        tracing::trace!(timestamp, chain_id = %chain_id, unit_price, "decoded tx header");
        Ok(TxHeader::new(timestamp, chain_id, unit_price))
    }

    /// Decode a standalone header; `buf` must be exactly `TxHeader::LEN` bytes.
    pub fn from_bytes(buf: &[u8]) -> Result<TxHeader, HeaderError> {
        let mut p = Packer::from_bytes(buf);
        let header = TxHeader::decode(&mut p)?;
        p.expect_empty();
        p.check()?;
        Ok(header)
    }
}
