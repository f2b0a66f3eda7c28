//! Aggregation throughput: must stay linear in frame count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use thorax_analysis::aggregation::StudyAggregator;
use thorax_core::types::FrameResult;

fn synthetic_frames(count: usize) -> Vec<FrameResult> {
    (0..count)
        .map(|i| {
            FrameResult::new(
                "1.2.840.113.1",
                i as u32,
                ((i * 31) % 100) as f64 / 100.0,
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let aggregator = StudyAggregator::with_defaults();
    let mut group = c.benchmark_group("aggregate");

    for count in [100usize, 1_000, 10_000] {
        let frames = synthetic_frames(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &frames, |b, frames| {
            b.iter(|| {
                aggregator
                    .aggregate("1.2.840.113", "1.2.840.113.1", black_box(frames))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
