//! src/headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Field order and widths are fixed; no prefixes, no optional fields.
//! - Encoding never validates: an invalid header still travels so the
//!   receiver can reject it with a precise error.

use crate::codec::Packer;
use crate::headers::types::TxHeader;

impl TxHeader {
    /// Append the canonical 48-byte form to `p`.
    ///
    /// The packer is owned and sized by the caller; any overflow is recorded
    /// on the packer itself.
    pub fn encode(&self, p: &mut Packer) {
        p.pack_i64(self.timestamp()); // 0..8   timestamp
        p.pack_id(self.chain_id()); //   8..40  chain id
        p.pack_u64(self.unit_price()); // 40..48 unit price
    }

    /// Standalone canonical encoding.
    pub fn to_bytes(&self) -> [u8; TxHeader::LEN] {
        let mut p = Packer::new(TxHeader::LEN);
        self.encode(&mut p);

        debug_assert_eq!(p.bytes().len(), TxHeader::LEN, "encoding wrote incorrect length");

        let mut out = [0u8; TxHeader::LEN];
        out.copy_from_slice(p.bytes());
        out
    }
}
