//! ids.rs
//! Fixed-length opaque identifiers.
//!
//! A `ChainId` binds a transaction to one chain instance. It carries no
//! structure beyond its 32 raw bytes; equality is byte equality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::constants::ID_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("invalid id length: expected {need} bytes, got {have}")]
    InvalidLength { have: usize, need: usize },

    #[error("invalid id hex: {0}")]
    InvalidHex(String),
}

/// 32-byte chain identifier.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId([u8; ID_LEN]);

impl ChainId {
    pub const LEN: usize = ID_LEN;

    /// All-zero identifier. Never a real chain.
    pub const EMPTY: ChainId = ChainId([0u8; ID_LEN]);

    pub const fn new(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdError> {
        let raw: [u8; ID_LEN] = bytes.try_into().map_err(|_| IdError::InvalidLength {
            have: bytes.len(),
            need: ID_LEN,
        })?;
        Ok(Self(raw))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<[u8; ID_LEN]> for ChainId {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for ChainId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self)
    }
}

impl FromStr for ChainId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| IdError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
