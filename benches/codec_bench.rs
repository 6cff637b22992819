// In seqtoken-core/benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seqtoken::{decode, encode};

// --- Workload Generation ---

/// A grouped-favoring workload: few distinct values, long repetitions.
fn generate_repetitive_values(size: usize) -> Vec<u16> {
    let distinct = [17u16, 150, 3, 299, 42, 8];
    (0..size).map(|i| distinct[(i / 128) % distinct.len()]).collect()
}

/// A raw-favoring workload: the full domain cycled in order.
fn generate_distinct_values(size: usize) -> Vec<u16> {
    (0..size).map(|i| (i % 300) as u16 + 1).collect()
}

// --- Benchmark Suite ---

// 600 elements keeps every repetition under the 10-bit count cap while still
// putting the two workloads on opposite sides of the mode heuristic
// (6 * 19 < 600 * 9 for the repetitive one, 300 * 19 >= 600 * 9 for the other).
const BENCH_SEQUENCE_LEN: usize = 600;

fn bench_codec(c: &mut Criterion) {
    // --- Setup Data ---
    let repetitive = generate_repetitive_values(BENCH_SEQUENCE_LEN);
    let distinct = generate_distinct_values(BENCH_SEQUENCE_LEN);

    // Prepare tokens once to benchmark decoding accurately.
    let grouped_token = encode(&repetitive).unwrap();
    let raw_token = encode(&distinct).unwrap();

    // --- Create a Benchmark Group ---
    let mut group = c.benchmark_group("Token Codec");
    group.throughput(criterion::Throughput::Elements(BENCH_SEQUENCE_LEN as u64));

    group.bench_function("Encode (Grouped Workload)", |b| {
        b.iter(|| black_box(encode(black_box(&repetitive))))
    });
    group.bench_function("Encode (Raw Workload)", |b| {
        b.iter(|| black_box(encode(black_box(&distinct))))
    });

    group.bench_function("Decode (Grouped Token)", |b| {
        b.iter(|| black_box(decode(black_box(&grouped_token))))
    });
    group.bench_function("Decode (Raw Token)", |b| {
        b.iter(|| black_box(decode(black_box(&raw_token))))
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
