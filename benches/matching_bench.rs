use criterion::{criterion_group, criterion_main, Criterion};
use inkforge::config::MatchConfig;
use inkforge::geometry::{frechet_dist, Curve, Point};
use inkforge::matcher::{MatchRequest, ReferenceSet};
use std::hint::black_box;

fn wave(n: usize, phase: f64, y_offset: f64) -> Curve {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Point::new(t * 800.0, y_offset + (t * 6.0 + phase).sin() * 60.0)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let reference = wave(200, 0.0, 0.0);
    let captured = wave(200, 0.1, 8.0);

    c.bench_function("frechet_dist (200x200)", |b| {
        b.iter(|| frechet_dist(black_box(&reference), black_box(&captured)))
    });

    let cfg = MatchConfig::default();
    c.bench_function("match_stroke (200 pts, no order check)", |b| {
        b.iter(|| {
            MatchRequest::builder()
                .captured(black_box(&captured))
                .target(&reference)
                .config(&cfg)
                .build()
                .run()
        })
    });

    let strokes = ReferenceSet::from_curves(
        (0..8).map(|k| wave(200, 0.0, k as f64 * 30.0)).collect(),
    )
    .expect("bench strokes");
    let target = &strokes.get(0).expect("first stroke").points;
    c.bench_function("match_stroke (200 pts, 8 strokes)", |b| {
        b.iter(|| {
            MatchRequest::builder()
                .captured(black_box(&captured))
                .target(target)
                .config(&cfg)
                .strokes(&strokes)
                .build()
                .run()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
