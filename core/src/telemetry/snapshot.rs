use serde::{Deserialize, Serialize};

use crate::telemetry::counters::HeaderCounters;

/// Immutable view of `HeaderCounters` with derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub headers_decoded: u64,
    pub decode_failures: u64,
    pub bytes_decoded: u64,
    pub headers_accepted: u64,
    pub headers_rejected: u64,
    pub rejected_misaligned: u64,
    pub rejected_too_late: u64,
    pub rejected_too_early: u64,
    pub rejected_chain_id: u64,
    pub rejected_unit_price: u64,
    /// accepted / validated; 0.0 when nothing was validated.
    pub acceptance_ratio: f64,
}

impl TelemetrySnapshot {
    pub fn from(counters: &HeaderCounters) -> Self {
        let validated = counters.total_validated();
        let acceptance_ratio = if validated > 0 {
            counters.headers_accepted as f64 / validated as f64
        } else {
            0.0
        };

        Self {
            headers_decoded: counters.headers_decoded,
            decode_failures: counters.decode_failures,
            bytes_decoded: counters.bytes_decoded,
            headers_accepted: counters.headers_accepted,
            headers_rejected: counters.total_rejected(),
            rejected_misaligned: counters.rejected_misaligned,
            rejected_too_late: counters.rejected_too_late,
            rejected_too_early: counters.rejected_too_early,
            rejected_chain_id: counters.rejected_chain_id,
            rejected_unit_price: counters.rejected_unit_price,
            acceptance_ratio,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn sanity_check(&self) -> bool {
        (0.0..=1.0).contains(&self.acceptance_ratio)
            && self.headers_rejected
                == self.rejected_misaligned
                    + self.rejected_too_late
                    + self.rejected_too_early
                    + self.rejected_chain_id
                    + self.rejected_unit_price
    }
}
