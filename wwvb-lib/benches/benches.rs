use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use wwvb::buffer::{DEFAULT_CAPTURE_SECONDS, DEFAULT_RATE};
use wwvb::sync::FIXED_FRAME_MAP;
use wwvb::{SampleBuffer, Symbol};

/// Two minutes of capture with one clean frame planted a third of the way in.
fn synthetic_capture() -> SampleBuffer {
    let mut symbols = vec![Symbol::Zero; DEFAULT_CAPTURE_SECONDS];
    for (second, symbol) in FIXED_FRAME_MAP {
        symbols[40 + second] = symbol;
    }
    let samples: Vec<u8> = symbols
        .iter()
        .flat_map(|s| s.ideal_samples(DEFAULT_RATE))
        .collect();
    SampleBuffer::new(samples, DEFAULT_RATE).unwrap()
}

fn bench_find_frame(c: &mut Criterion) {
    let buffer = synthetic_capture();
    let mut group = c.benchmark_group("sync");
    group.throughput(Throughput::Bytes(buffer.len() as u64));
    group.bench_function("find_frame", |b| {
        b.iter(|| wwvb::find_frame(&buffer));
    });
    group.finish();
}

fn bench_decode_frame(c: &mut Criterion) {
    let buffer = synthetic_capture();
    let offset = wwvb::find_frame(&buffer).offset;
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(buffer.frame_len() as u64));
    group.bench_function("decode_frame", |b| {
        b.iter(|| wwvb::decode_frame(&buffer, offset));
    });
    group.finish();
}

criterion_group!(benches, bench_find_frame, bench_decode_frame);
criterion_main!(benches);
