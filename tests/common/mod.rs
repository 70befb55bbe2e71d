#![allow(dead_code)] // not every test binary uses every helper

use inkforge::geometry::{Curve, Point};
use inkforge::matcher::ReferenceSet;

/// `n` evenly spaced samples from `from` to `to`, inclusive.
pub fn line(from: (f64, f64), to: (f64, f64), n: usize) -> Curve {
    assert!(n >= 2);
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Point::new(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
        })
        .collect()
}

pub fn pts(raw: &[(f64, f64)]) -> Curve {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn shifted(curve: &[Point], dx: f64, dy: f64) -> Curve {
    curve.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect()
}

/// Two horizontal strokes, 500 long: one at y = 0 and one at y = `gap`.
pub fn two_bars(gap: f64) -> ReferenceSet {
    ReferenceSet::from_curves(vec![
        line((0.0, 0.0), (500.0, 0.0), 11),
        line((0.0, gap), (500.0, gap), 11),
    ])
    .expect("valid reference set")
}
