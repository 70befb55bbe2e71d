use serde::{Deserialize, Serialize};

/// A sample point in the caller's drawing space.
///
/// Serialized as a bare `[x, y]` pair so recorded strokes stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// An ordered drawing path. Order matters; consecutive duplicates are allowed.
pub type Curve = Vec<Point>;

#[inline(always)]
pub fn subtract(a: Point, b: Point) -> Point {
    Point::new(a.x - b.x, a.y - b.y)
}

#[inline(always)]
pub fn magnitude(v: Point) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline(always)]
pub fn distance(a: Point, b: Point) -> f64 {
    magnitude(subtract(a, b))
}

/// Sum of the distances between consecutive points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[1], w[0])).sum()
}

/// Cosine of the angle between two vectors.
///
/// A zero-length vector has no direction, so the similarity is `0.0` (neither
/// aligned nor reversed) instead of NaN.
pub fn cosine_similarity(v1: Point, v2: Point) -> f64 {
    let denom = magnitude(v1) * magnitude(v2);
    if denom == 0.0 {
        return 0.0;
    }
    (v1.x * v2.x + v1.y * v2.y) / denom
}

/// Arithmetic mean; `None` for an empty slice.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Difference vectors between consecutive points.
pub fn edge_vectors(points: &[Point]) -> Vec<Point> {
    points.windows(2).map(|w| subtract(w[1], w[0])).collect()
}

/// Centers the curve's bounding box on the origin and scales it uniformly so
/// its larger side is 1. Curves with fewer than 2 points come back unchanged.
pub fn normalize_curve(points: &[Point]) -> Curve {
    if points.len() < 2 {
        return points.to_vec();
    }

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = max_x - min_x;
    let height = max_y - min_y;
    let mut scale = width.max(height);
    if scale == 0.0 {
        scale = 1.0;
    }
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;

    points
        .iter()
        .map(|p| Point::new((p.x - cx) / scale, (p.y - cy) / scale))
        .collect()
}

/// Rotates every point about the origin by `angle` radians.
pub fn rotate(points: &[Point], angle: f64) -> Curve {
    let (sin, cos) = angle.sin_cos();
    points
        .iter()
        .map(|p| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

/// Discrete Fréchet distance between two sampled curves.
///
/// Keeps only the previous column of the DP table, so memory is linear in the
/// shorter curve. Returns `f64::INFINITY` if either curve is empty.
pub fn frechet_dist(curve_a: &[Point], curve_b: &[Point]) -> f64 {
    let (long, short) = if curve_a.len() >= curve_b.len() {
        (curve_a, curve_b)
    } else {
        (curve_b, curve_a)
    };
    if short.is_empty() {
        return f64::INFINITY;
    }

    let mut prev_col = vec![0.0_f64; short.len()];
    let mut cur_col = vec![0.0_f64; short.len()];

    for (i, &lp) in long.iter().enumerate() {
        for (j, &sp) in short.iter().enumerate() {
            let d = distance(lp, sp);
            cur_col[j] = match (i, j) {
                (0, 0) => d,
                (_, 0) => prev_col[0].max(d),
                (0, _) => cur_col[j - 1].max(d),
                _ => prev_col[j].min(prev_col[j - 1]).min(cur_col[j - 1]).max(d),
            };
        }
        std::mem::swap(&mut prev_col, &mut cur_col);
    }

    prev_col[short.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Curve {
        (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_path_length_of_l_shape() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ];
        assert!((path_length(&pts) - 7.0).abs() < 1e-12);
        assert_eq!(path_length(&pts[..1]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_zero_vector_is_zero() {
        let zero = Point::new(0.0, 0.0);
        let v = Point::new(1.0, 1.0);
        assert_eq!(cosine_similarity(zero, v), 0.0);
        assert_eq!(cosine_similarity(v, zero), 0.0);
        assert!((cosine_similarity(v, v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frechet_self_is_zero() {
        let c = line(7);
        assert_eq!(frechet_dist(&c, &c), 0.0);
    }

    #[test]
    fn test_frechet_is_symmetric_on_uneven_lengths() {
        let a = line(5);
        let b: Curve = (0..3).map(|i| Point::new(i as f64 * 2.0, 1.0)).collect();
        assert_eq!(frechet_dist(&a, &b), frechet_dist(&b, &a));
    }

    #[test]
    fn test_frechet_parallel_offset() {
        let a = line(4);
        let b: Curve = a.iter().map(|p| Point::new(p.x, 2.0)).collect();
        assert!((frechet_dist(&a, &b) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_frechet_takes_cheapest_coupling() {
        let a = line(3);
        let b = vec![Point::new(0.0, 1.0), Point::new(2.0, 1.0)];
        // The middle sample can couple to either end of `b` at sqrt(2).
        let d: f64 = frechet_dist(&a, &b);
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_frechet_empty_is_infinite() {
        assert!(frechet_dist(&line(3), &[]).is_infinite());
    }

    #[test]
    fn test_normalize_horizontal_segment() {
        let pts = vec![Point::new(10.0, 5.0), Point::new(30.0, 5.0)];
        let n = normalize_curve(&pts);
        assert_eq!(n, vec![Point::new(-0.5, 0.0), Point::new(0.5, 0.0)]);
    }

    #[test]
    fn test_normalize_single_point_unchanged() {
        let pts = vec![Point::new(10.0, 5.0)];
        assert_eq!(normalize_curve(&pts), pts);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(&[Point::new(1.0, 0.0)], std::f64::consts::FRAC_PI_2);
        assert!(r[0].x.abs() < 1e-12);
        assert!((r[0].y - 1.0).abs() < 1e-12);
    }
}
