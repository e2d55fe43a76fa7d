// Telemetry suite: counters fed by real decode/validate results.

#[cfg(test)]
mod tests {
    use txbase_core::{
        headers::{HeaderError, TxHeader},
        ids::ChainId,
        rules::RuleSet,
        telemetry::{HeaderCounters, TelemetrySnapshot},
    };

    const BLOCK_TIME: i64 = 10_000;

    fn chain() -> ChainId {
        ChainId::new([0x42; 32])
    }

    fn run(counters: &mut HeaderCounters, h: TxHeader) {
        let decoded = TxHeader::from_bytes(&h.to_bytes());
        counters.record_decode(&decoded);
        if let Ok(h) = decoded {
            let rules = RuleSet::new(5_000, 2).unwrap();
            counters.record_validation(&h.validate(&chain(), &rules, BLOCK_TIME));
        }
    }

    #[test]
    fn counts_each_outcome() {
        let mut c = HeaderCounters::default();
        run(&mut c, TxHeader::new(12_000, chain(), 2)); // accepted
        run(&mut c, TxHeader::new(9_000, chain(), 2)); // too late
        run(&mut c, TxHeader::new(16_000, chain(), 2)); // too early
        run(&mut c, TxHeader::new(12_000, ChainId::EMPTY, 2)); // wrong chain
        run(&mut c, TxHeader::new(12_000, chain(), 1)); // price
        run(&mut c, TxHeader::new(12_001, chain(), 2)); // misaligned, fails decode

        assert_eq!(c.headers_decoded, 5);
        assert_eq!(c.bytes_decoded, 5 * 48);
        assert_eq!(c.decode_failures, 1);
        assert_eq!(c.headers_accepted, 1);
        assert_eq!(c.rejected_too_late, 1);
        assert_eq!(c.rejected_too_early, 1);
        assert_eq!(c.rejected_chain_id, 1);
        assert_eq!(c.rejected_unit_price, 1);
        assert_eq!(c.rejected_misaligned, 0);
        assert_eq!(c.total_rejected(), 4);
        assert_eq!(c.total_validated(), 5);
    }

    #[test]
    fn validation_misalignment_is_counted() {
        let mut c = HeaderCounters::default();
        c.record_validation(&Err(HeaderError::MisalignedTimestamp { timestamp: 1 }));
        assert_eq!(c.rejected_misaligned, 1);
    }

    #[test]
    fn merge_adds_fields() {
        let mut a = HeaderCounters::default();
        run(&mut a, TxHeader::new(12_000, chain(), 2));
        let mut b = a.clone();
        run(&mut b, TxHeader::new(9_000, chain(), 2));

        a.merge(&b);
        assert_eq!(a.headers_accepted, 2);
        assert_eq!(a.rejected_too_late, 1);
        assert_eq!(a.headers_decoded, 3);
    }

    #[test]
    fn snapshot_ratio_and_json() {
        let mut c = HeaderCounters::default();
        run(&mut c, TxHeader::new(12_000, chain(), 2));
        run(&mut c, TxHeader::new(9_000, chain(), 2));

        let s = TelemetrySnapshot::from(&c);
        assert_eq!(s.headers_accepted, 1);
        assert_eq!(s.headers_rejected, 1);
        assert!((s.acceptance_ratio - 0.5).abs() < f64::EPSILON);
        assert!(s.sanity_check());

        let json = s.to_json().unwrap();
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn empty_snapshot_has_zero_ratio() {
        let s = TelemetrySnapshot::from(&HeaderCounters::default());
        assert_eq!(s.acceptance_ratio, 0.0);
        assert!(s.sanity_check());
    }

    #[test]
    fn counters_persist_through_bincode() {
        let mut c = HeaderCounters::default();
        run(&mut c, TxHeader::new(12_000, chain(), 2));
        run(&mut c, TxHeader::new(12_000, chain(), 1));

        let bytes = c.to_bytes().unwrap();
        assert_eq!(HeaderCounters::from_bytes(&bytes).unwrap(), c);
    }
}
