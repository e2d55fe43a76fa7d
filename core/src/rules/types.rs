use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_MIN_UNIT_PRICE, DEFAULT_VALIDITY_WINDOW_MS};

/// Parameters a header is validated against.
pub trait Rules {
    /// Furthest a header's expiry may sit ahead of block time, in ms. Non-negative.
    fn validity_window(&self) -> i64;

    /// Lowest accepted unit price.
    fn min_unit_price(&self) -> u64;
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("validity window must be non-negative, got {0} ms")]
    NegativeValidityWindow(i64),

    #[error("rules json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rules io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Concrete rule set, loadable from JSON configuration.
///
/// ```json
/// { "validityWindow": 60000, "minUnitPrice": 1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleSet {
    #[serde(default = "default_validity_window")]
    pub validity_window: i64,
    #[serde(default = "default_min_unit_price")]
    pub min_unit_price: u64,
}

fn default_validity_window() -> i64 {
    DEFAULT_VALIDITY_WINDOW_MS
}

fn default_min_unit_price() -> u64 {
    DEFAULT_MIN_UNIT_PRICE
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            validity_window: DEFAULT_VALIDITY_WINDOW_MS,
            min_unit_price: DEFAULT_MIN_UNIT_PRICE,
        }
    }
}

impl RuleSet {
    pub fn new(validity_window: i64, min_unit_price: u64) -> Result<Self, RulesError> {
        let rules = Self { validity_window, min_unit_price };
        rules.check()?;
        Ok(rules)
    }

    pub fn check(&self) -> Result<(), RulesError> {
        if self.validity_window < 0 {
            return Err(RulesError::NegativeValidityWindow(self.validity_window));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, RulesError> {
        let rules: RuleSet = serde_json::from_str(s)?;
        rules.check()?;
        tracing::debug!(
            validity_window = rules.validity_window,
            min_unit_price = rules.min_unit_price,
            "loaded rule set"
        );
        Ok(rules)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl Rules for RuleSet {
    #[inline]
    fn validity_window(&self) -> i64 {
        self.validity_window
    }

    #[inline]
    fn min_unit_price(&self) -> u64 {
        self.min_unit_price
    }
}

impl<R: Rules + ?Sized> Rules for &R {
    fn validity_window(&self) -> i64 {
        (**self).validity_window()
    }

    fn min_unit_price(&self) -> u64 {
        (**self).min_unit_price()
    }
}
