use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use editscript::{compare_with, Algorithm, CompareOptions, Identity};

/// Line-like input: mostly unique lines, a few shared ones, and a block of
/// edits every `stride` lines.
fn lines(len: usize, stride: usize, salt: &str) -> Vec<String> {
    (0..len)
        .map(|i| {
            if i % stride == 0 {
                format!("{salt} line {i}")
            } else if i % 7 == 0 {
                "}".to_string()
            } else {
                format!("line {i}")
            }
        })
        .collect()
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for len in [1_000usize, 10_000] {
        let old = lines(len, 50, "old");
        let new = lines(len, 37, "new");
        for algorithm in [Algorithm::Myers, Algorithm::Optimized] {
            let options = CompareOptions::default()
                .with_algorithm(algorithm)
                .with_reduction_threshold(f64::INFINITY);
            let id = BenchmarkId::new(format!("{algorithm:?}"), len);
            group.bench_with_input(id, &len, |b, _| {
                b.iter(|| compare_with(black_box(&old), black_box(&new), &Identity, &options))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
