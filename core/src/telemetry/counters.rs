//! telemetry/counters.rs
//! Counters for header decode and validation outcomes.
//!
//! Summary: Owned by the caller, fed with the results of `decode`/`validate`.
//! Converted into an immutable `TelemetrySnapshot` for reporting.
use bincode::{Decode, Encode};
use std::ops::AddAssign;

use crate::headers::{HeaderError, TxHeader};

/// Deterministic counters, one set per processing pipeline
#[derive(Default, Clone, Debug, Encode, Decode, PartialEq, Eq)]
pub struct HeaderCounters {
    pub headers_decoded: u64,
    pub decode_failures: u64,
    pub bytes_decoded: u64,

    pub headers_accepted: u64,
    pub rejected_misaligned: u64,
    pub rejected_too_late: u64,
    pub rejected_too_early: u64,
    pub rejected_chain_id: u64,
    pub rejected_unit_price: u64,
}

impl HeaderCounters {
    /// Record one decode attempt.
    pub fn record_decode(&mut self, res: &Result<TxHeader, HeaderError>) {
        match res {
            Ok(h) => {
                self.headers_decoded += 1;
                self.bytes_decoded += h.size() as u64;
            }
            Err(_) => self.decode_failures += 1,
        }
    }

    /// Record one validation outcome.
    pub fn record_validation(&mut self, res: &Result<(), HeaderError>) {
        match res {
            Ok(()) => self.headers_accepted += 1,
            Err(HeaderError::MisalignedTimestamp { .. }) => self.rejected_misaligned += 1,
            Err(HeaderError::TimestampTooLate { .. }) => self.rejected_too_late += 1,
            Err(HeaderError::TimestampTooEarly { .. }) => self.rejected_too_early += 1,
            Err(HeaderError::InvalidChainId { .. }) => self.rejected_chain_id += 1,
            Err(HeaderError::InvalidUnitPrice { .. }) => self.rejected_unit_price += 1,
            // validate never produces this; counted as a decode failure
            Err(HeaderError::MalformedInput(_)) => self.decode_failures += 1,
        }
    }

    pub fn total_rejected(&self) -> u64 {
        self.rejected_misaligned
            + self.rejected_too_late
            + self.rejected_too_early
            + self.rejected_chain_id
            + self.rejected_unit_price
    }

    pub fn total_validated(&self) -> u64 {
        self.headers_accepted + self.total_rejected()
    }

    // Per-worker counters are merged at the end instead of shared:
    // no locks, no atomics.
    pub fn merge(&mut self, other: &HeaderCounters) {
        *self += other.clone();
    }

    /// Compact binary form, for persisting counters across restarts.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let (counters, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(counters)
    }
}

impl AddAssign for HeaderCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.headers_decoded     += rhs.headers_decoded;
        self.decode_failures     += rhs.decode_failures;
        self.bytes_decoded       += rhs.bytes_decoded;

        self.headers_accepted    += rhs.headers_accepted;
        self.rejected_misaligned += rhs.rejected_misaligned;
        self.rejected_too_late   += rhs.rejected_too_late;
        self.rejected_too_early  += rhs.rejected_too_early;
        self.rejected_chain_id   += rhs.rejected_chain_id;
        self.rejected_unit_price += rhs.rejected_unit_price;
    }
}
