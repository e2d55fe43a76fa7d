use criterion::{black_box, criterion_group, criterion_main, Criterion};

use txbase_core::{codec::Packer, headers::TxHeader, ids::ChainId, rules::RuleSet};

fn bench_header(c: &mut Criterion) {
    let chain = ChainId::new([0x5A; 32]);
    let header = TxHeader::new(1_700_000_000_000, chain, 100);
    let bytes = header.to_bytes();
    let rules = RuleSet::default();

    c.bench_function("tx_header_encode", |b| {
        b.iter(|| {
            let mut p = Packer::new(TxHeader::LEN);
            black_box(&header).encode(&mut p);
            black_box(p.into_bytes())
        })
    });

    c.bench_function("tx_header_decode", |b| {
        b.iter(|| TxHeader::from_bytes(black_box(&bytes)))
    });

    c.bench_function("tx_header_validate", |b| {
        b.iter(|| black_box(&header).validate(&chain, &rules, black_box(1_699_999_990_000)))
    });
}

criterion_group!(benches, bench_header);
criterion_main!(benches);
