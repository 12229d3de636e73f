use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use ubx::{Decoder, Frame};

fn bench_feed(c: &mut Criterion) {
    let frame = Frame::new(0x01, 0x22, vec![0u8; 20]).encode().unwrap();
    let mut data = Vec::with_capacity(frame.len() * 256);
    for _ in 0..256 {
        data.extend_from_slice(&frame);
    }

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("feed", |b| {
        b.iter(|| {
            let mut decoder = Decoder::default();
            let records = decoder.feed(&data);
            assert_eq!(records.len(), 256);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_feed);
criterion_main!(benches);
