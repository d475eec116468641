use bcbp_decoder::BcbpDecoder;
use bcbp_tests::{SINGLE_LEG, WITH_SECURITY, two_leg};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_decode_single_leg(c: &mut Criterion) {
    c.bench_function("decode_single_leg", |b| {
        b.iter(|| BcbpDecoder::decode(SINGLE_LEG).unwrap());
    });
}

fn bench_decode_two_leg(c: &mut Criterion) {
    let pass = two_leg();
    c.bench_function("decode_two_leg", |b| {
        b.iter(|| BcbpDecoder::decode(&pass).unwrap());
    });
}

fn bench_decode_with_security(c: &mut Criterion) {
    c.bench_function("decode_with_security", |b| {
        b.iter(|| BcbpDecoder::decode(WITH_SECURITY).unwrap());
    });
}

criterion_group!(
    benches,
    bench_decode_single_leg,
    bench_decode_two_leg,
    bench_decode_with_security
);
criterion_main!(benches);
