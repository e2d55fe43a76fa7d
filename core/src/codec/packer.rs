//! src/codec/packer.rs
//!
//! Sticky-fault byte cursor.
//!
//! Design notes:
//! - Writes append to an owned buffer bounded by `max_size`.
//! - Reads consume from `offset` forward.
//! - The first fault is kept; later calls do nothing and reads yield zero values,
//!   so a decode sequence can run straight-line and check `err()` once.
//! - All multi-byte integers are big-endian.

use byteorder::{BigEndian, ByteOrder};

use crate::codec::types::PackerError;
use crate::constants::{ID_LEN, INT64_LEN, MAX_PACKER_SIZE, UINT64_LEN};
use crate::ids::ChainId;

#[derive(Debug, Clone)]
pub struct Packer {
    bytes: Vec<u8>,
    offset: usize,
    max_size: usize,
    err: Option<PackerError>,
}

impl Default for Packer {
    fn default() -> Self {
        Self::new(MAX_PACKER_SIZE)
    }
}

impl Packer {
    /// Empty packer for writing, refusing to grow past `max_size` bytes.
    pub fn new(max_size: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(max_size.min(MAX_PACKER_SIZE)),
            offset: 0,
            max_size,
            err: None,
        }
    }

    /// Packer positioned at the start of `bytes`, for reading.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        Self {
            max_size: bytes.len(),
            bytes,
            offset: 0,
            err: None,
        }
    }

    #[inline]
    pub fn err(&self) -> Option<&PackerError> {
        self.err.as_ref()
    }

    #[inline]
    pub fn errored(&self) -> bool {
        self.err.is_some()
    }

    /// `Err` with the recorded fault, if any.
    pub fn check(&self) -> Result<(), PackerError> {
        match &self.err {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// True once every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Record `TrailingBytes` if anything is left to read.
    pub fn expect_empty(&mut self) {
        if self.err.is_none() && !self.is_empty() {
            self.err = Some(PackerError::TrailingBytes { remaining: self.remaining() });
        }
    }

    fn fail(&mut self, e: PackerError) {
        if self.err.is_none() {
            self.err = Some(e);
        }
    }

    // --- writes ---

    fn put(&mut self, src: &[u8]) {
        if self.err.is_some() {
            return;
        }
        let need = self.bytes.len() + src.len();
        if need > self.max_size {
            self.fail(PackerError::Oversized { need, max: self.max_size });
            return;
        }
        self.bytes.extend_from_slice(src);
    }

    pub fn pack_i64(&mut self, v: i64) {
        let mut buf = [0u8; INT64_LEN];
        BigEndian::write_i64(&mut buf, v);
        self.put(&buf);
    }

    pub fn pack_u64(&mut self, v: u64) {
        let mut buf = [0u8; UINT64_LEN];
        BigEndian::write_u64(&mut buf, v);
        self.put(&buf);
    }

    pub fn pack_fixed_bytes(&mut self, b: &[u8]) {
        self.put(b);
    }

    pub fn pack_id(&mut self, id: &ChainId) {
        self.put(id.as_bytes());
    }

    // --- reads ---

    fn take(&mut self, n: usize) -> Option<&[u8]> {
        if self.err.is_some() {
            return None;
        }
        let have = self.remaining();
        if n > have {
            self.fail(PackerError::InsufficientLength { need: n, have });
            return None;
        }
        let start = self.offset;
        self.offset += n;
        Some(&self.bytes[start..start + n])
    }

    /// Read a big-endian `i64`. With `required`, a zero value is a fault.
    pub fn unpack_i64(&mut self, required: bool) -> i64 {
        let v = match self.take(INT64_LEN) {
            Some(b) => BigEndian::read_i64(b),
            None => return 0,
        };
        if required && v == 0 {
            self.fail(PackerError::FieldNotPopulated);
        }
        v
    }

    /// Read a big-endian `u64`. With `required`, a zero value is a fault.
    pub fn unpack_u64(&mut self, required: bool) -> u64 {
        let v = match self.take(UINT64_LEN) {
            Some(b) => BigEndian::read_u64(b),
            None => return 0,
        };
        if required && v == 0 {
            self.fail(PackerError::FieldNotPopulated);
        }
        v
    }

    pub fn unpack_fixed_bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut dst = [0u8; N];
        if let Some(b) = self.take(N) {
            dst.copy_from_slice(b);
        }
        dst
    }

    /// Read a 32-byte identifier. With `required`, the all-zero id is a fault.
    pub fn unpack_id(&mut self, required: bool) -> ChainId {
        let id = ChainId::new(self.unpack_fixed_bytes::<ID_LEN>());
        if self.err.is_none() && required && id.is_empty() {
            self.fail(PackerError::FieldNotPopulated);
        }
        id
    }
}
