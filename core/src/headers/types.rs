//! headers/types.rs
//! Transaction base header and its validation rule.
//!
//! Notes:
//! - The base header is the envelope every transaction carries regardless of payload.
//! - Construction never validates; a builder may hold a transiently invalid value.
//! - `validate` is a pure function of the header, the rules and the block time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::PackerError;
use crate::constants::{BASE_HEADER_LEN, MILLISECONDS_PER_SECOND};
use crate::ids::ChainId;
use crate::rules::Rules;

/// Common envelope fields of every transaction.
///
/// Wire layout (big-endian, 48 bytes):
///
/// ```text
/// [ timestamp (8) ]
/// [ chain_id (32) ]
/// [ unit_price (8) ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHeader {
    /// Expiry of the transaction in ms (inclusive). Once block time passes it
    /// and the transaction was not included, it is safe to regenerate it.
    #[serde(rename = "nonce")]
    timestamp: i64,

    /// Protects against replay on a different chain instance.
    #[serde(rename = "chainId")]
    chain_id: ChainId,

    /// Price per unit the submitter is willing to pay.
    #[serde(rename = "unitPrice")]
    unit_price: u64,
}

impl TxHeader {
    pub const LEN: usize = BASE_HEADER_LEN;

    pub const fn new(timestamp: i64, chain_id: ChainId, unit_price: u64) -> Self {
        Self { timestamp, chain_id, unit_price }
    }

    #[inline]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[inline]
    pub const fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    #[inline]
    pub const fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Encoded size. Constant: headers are embedded without a length prefix.
    #[inline]
    pub const fn size(&self) -> usize {
        Self::LEN
    }

    /// Check the header against the chain it is being included on.
    ///
    /// `block_time` is the consensus time of the block under evaluation, not
    /// the local clock. Checks run in a fixed order and the first failure wins.
    pub fn validate<R: Rules>(
        &self,
        chain_id: &ChainId,
        rules: &R,
        block_time: i64,
    ) -> Result<(), HeaderError> {
        let res = self.check(chain_id, rules, block_time);
        if let Err(e) = &res {
            tracing::debug!(
                timestamp = self.timestamp,
                chain_id = %self.chain_id,
                unit_price = self.unit_price,
                block_time,
                error = %e,
                "rejected tx header"
            );
        }
        res
    }

    fn check<R: Rules>(
        &self,
        chain_id: &ChainId,
        rules: &R,
        block_time: i64,
    ) -> Result<(), HeaderError> {
        check_alignment(self.timestamp)?;

        // tx: 100, block: 110
        if self.timestamp < block_time {
            return Err(HeaderError::TimestampTooLate {
                timestamp: self.timestamp,
                block_time,
            });
        }

        // tx: 100, block: 10
        let latest = block_time.saturating_add(rules.validity_window());
        if self.timestamp > latest {
            return Err(HeaderError::TimestampTooEarly {
                timestamp: self.timestamp,
                latest,
            });
        }

        if self.chain_id != *chain_id {
            return Err(HeaderError::InvalidChainId {
                have: self.chain_id,
                need: *chain_id,
            });
        }

        let min = rules.min_unit_price();
        if self.unit_price < min {
            return Err(HeaderError::InvalidUnitPrice {
                have: self.unit_price,
                min,
            });
        }

        Ok(())
    }
}

/// Timestamps must sit on a whole second. Shared by decode and validate.
#[inline]
pub(crate) fn check_alignment(timestamp: i64) -> Result<(), HeaderError> {
    if timestamp % MILLISECONDS_PER_SECOND != 0 {
        return Err(HeaderError::MisalignedTimestamp { timestamp });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Timestamp is not a multiple of 1000 ms.
    #[error("misaligned timestamp: {timestamp} is not a whole second")]
    MisalignedTimestamp { timestamp: i64 },

    /// Expiry already passed relative to block time.
    #[error("timestamp too late: {timestamp} < block time {block_time}")]
    TimestampTooLate { timestamp: i64, block_time: i64 },

    /// Expiry further out than the validity window allows.
    #[error("timestamp too early: {timestamp} > latest accepted {latest}")]
    TimestampTooEarly { timestamp: i64, latest: i64 },

    /// Header is bound to another chain.
    #[error("invalid chain id: expected {need}, got {have}")]
    InvalidChainId { have: ChainId, need: ChainId },

    /// Unit price below the rule-set floor.
    #[error("invalid unit price: {have} < minimum {min}")]
    InvalidUnitPrice { have: u64, min: u64 },

    /// Cursor ran out of bytes or was already faulted.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] PackerError),
}
